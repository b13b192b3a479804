// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering and paging of a month's transactions.

use crate::categories::{self, Category};
use crate::models::{MonthTotals, Transaction, TransactionType};
use crate::query;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, t: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => t == TransactionType::Income,
            TypeFilter::Expense => t == TransactionType::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            other => other.parse::<TransactionType>().map(|t| match t {
                TransactionType::Income => TypeFilter::Income,
                TransactionType::Expense => TypeFilter::Expense,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Key(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Key(k) => k == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Category filter cannot be empty".into());
        }
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Key(s.to_string()))
        }
    }
}

/// A calendar month with a 0-indexed month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub month: u32,
    pub year: i32,
}

impl MonthCursor {
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month: month.min(11),
            year,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.month0(), date.year())
    }

    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self::new(11, self.year - 1)
        } else {
            Self::new(self.month - 1, self.year)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            Self::new(0, self.year + 1)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }

    /// e.g. "June 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month + 1))
    }
}

/// Month listing state: the loaded records, both filters and the page cursor.
///
/// Any filter or month change sends the cursor back to page 1, and any change
/// to the filtered list pulls it back within `1..=total_pages()`.
#[derive(Debug, Clone)]
pub struct TransactionView {
    cursor: MonthCursor,
    records: Vec<Transaction>,
    type_filter: TypeFilter,
    category_filter: CategoryFilter,
    page: usize,
}

impl TransactionView {
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            cursor,
            records: Vec::new(),
            type_filter: TypeFilter::All,
            category_filter: CategoryFilter::All,
            page: 1,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.type_filter
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category_filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    /// Replaces the loaded records, e.g. after a reload or a delete.
    pub fn set_records(&mut self, records: Vec<Transaction>) {
        self.records = records;
        self.clamp_page();
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.type_filter = filter;
        self.page = 1;
        self.clamp_page();
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
        self.page = 1;
        self.clamp_page();
    }

    pub fn reset_filters(&mut self) {
        self.type_filter = TypeFilter::All;
        self.category_filter = CategoryFilter::All;
        self.page = 1;
    }

    /// Moves to another month and drops the previous month's records until the
    /// caller loads the new ones with [`TransactionView::set_records`].
    pub fn set_month(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
        self.records.clear();
        self.page = 1;
    }

    pub fn prev_month(&mut self) {
        self.set_month(self.cursor.prev());
    }

    pub fn next_month(&mut self) {
        self.set_month(self.cursor.next());
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn filtered(&self) -> Vec<&Transaction> {
        self.records
            .iter()
            .filter(|t| self.type_filter.matches(t.r#type))
            .filter(|t| self.category_filter.matches(&t.category))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn page_slice(&self) -> Vec<&Transaction> {
        let start = (self.page - 1) * PAGE_SIZE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn category_candidates(&self) -> Vec<&'static Category> {
        categories::filter_candidates(self.type_filter)
    }

    /// Totals over every loaded record, ignoring filters.
    pub fn totals(&self) -> MonthTotals {
        query::month_totals(&self.records)
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if self.page > total {
            self.page = total;
        }
        if self.page == 0 {
            self.page = 1;
        }
    }
}
