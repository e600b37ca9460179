use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outstanding balance of one customer across their open orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingRow {
    #[serde(alias = "name")]
    pub customer_name: String,
    #[serde(default, alias = "customerMobile", alias = "mobileNumber")]
    pub mobile: String,
    #[serde(default)]
    pub village: String,
    #[serde(default, alias = "orderCount")]
    pub orders: usize,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default, alias = "outstanding")]
    pub balance_amount: f64,
    /// Date of the oldest order that still carries a balance
    #[serde(default)]
    pub oldest_order_date: Option<NaiveDate>,
}

impl OutstandingRow {
    pub fn age_days(&self, today: NaiveDate) -> Option<i64> {
        self.oldest_order_date
            .map(|d| (today - d).num_days().max(0))
    }

    pub fn bucket(&self, today: NaiveDate) -> AgingBucket {
        self.age_days(today)
            .map(AgingBucket::from_days)
            .unwrap_or(AgingBucket::Current)
    }

    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.customer_name.to_lowercase().contains(&term)
            || self.village.to_lowercase().contains(&term)
            || self.mobile.contains(&term)
    }
}

/// Age of an outstanding balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgingBucket {
    /// 0..=30 days
    Current,
    /// 31..=60 days
    Days31To60,
    /// 61..=90 days
    Days61To90,
    /// over 90 days
    Over90,
}

impl AgingBucket {
    pub fn all() -> [AgingBucket; 4] {
        [
            AgingBucket::Current,
            AgingBucket::Days31To60,
            AgingBucket::Days61To90,
            AgingBucket::Over90,
        ]
    }

    pub fn from_days(days: i64) -> Self {
        match days {
            d if d <= 30 => AgingBucket::Current,
            31..=60 => AgingBucket::Days31To60,
            61..=90 => AgingBucket::Days61To90,
            _ => AgingBucket::Over90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgingBucket::Current => "0-30 days",
            AgingBucket::Days31To60 => "31-60 days",
            AgingBucket::Days61To90 => "61-90 days",
            AgingBucket::Over90 => "90+ days",
        }
    }
}

/// Column the customer table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutstandingSort {
    #[default]
    BalanceDesc,
    NameAsc,
    OldestFirst,
}

impl OutstandingSort {
    pub fn all() -> [OutstandingSort; 3] {
        [
            OutstandingSort::BalanceDesc,
            OutstandingSort::NameAsc,
            OutstandingSort::OldestFirst,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            OutstandingSort::BalanceDesc => "balance",
            OutstandingSort::NameAsc => "name",
            OutstandingSort::OldestFirst => "oldest",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutstandingSort::BalanceDesc => "Highest balance",
            OutstandingSort::NameAsc => "Customer name",
            OutstandingSort::OldestFirst => "Oldest first",
        }
    }

    pub fn apply(&self, rows: &mut [OutstandingRow]) {
        match self {
            OutstandingSort::BalanceDesc => rows.sort_by(|a, b| b.balance_amount.total_cmp(&a.balance_amount)),
            OutstandingSort::NameAsc => rows.sort_by(|a, b| {
                a.customer_name.to_lowercase().cmp(&b.customer_name.to_lowercase())
            }),
            // rows without a date go last
            OutstandingSort::OldestFirst => rows.sort_by_key(|r| (r.oldest_order_date.is_none(), r.oldest_order_date)),
        }
    }
}

/// Totals shown in the summary cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutstandingSummary {
    pub customers: usize,
    pub orders: usize,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub balance_amount: f64,
    /// Balance per aging bucket, in `AgingBucket::all()` order
    pub buckets: [f64; 4],
}

impl OutstandingSummary {
    pub fn from_rows(rows: &[OutstandingRow], today: NaiveDate) -> Self {
        let mut summary = Self::default();
        for row in rows.iter().filter(|r| r.balance_amount > 0.0) {
            summary.customers += 1;
            summary.orders += row.orders;
            summary.total_amount += row.total_amount;
            summary.paid_amount += row.paid_amount;
            summary.balance_amount += row.balance_amount;
            summary.buckets[row.bucket(today) as usize] += row.balance_amount;
        }
        summary
    }

    pub fn bucket_amount(&self, bucket: AgingBucket) -> f64 {
        self.buckets[bucket as usize]
    }

    /// Share of billed value already collected, 0..=100
    pub fn collection_rate(&self) -> f64 {
        if self.total_amount <= 0.0 {
            0.0
        } else {
            self.paid_amount / self.total_amount * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn row(name: &str, balance: f64, oldest: Option<&str>) -> OutstandingRow {
        OutstandingRow {
            customer_name: name.into(),
            orders: 2,
            total_amount: balance * 2.0,
            paid_amount: balance,
            balance_amount: balance,
            oldest_order_date: oldest.map(date),
            ..Default::default()
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(AgingBucket::from_days(0), AgingBucket::Current);
        assert_eq!(AgingBucket::from_days(30), AgingBucket::Current);
        assert_eq!(AgingBucket::from_days(31), AgingBucket::Days31To60);
        assert_eq!(AgingBucket::from_days(90), AgingBucket::Days61To90);
        assert_eq!(AgingBucket::from_days(91), AgingBucket::Over90);
    }

    #[test]
    fn test_summary_from_rows() {
        let today = date("2024-06-30");
        let rows = vec![
            row("Ramesh", 1000.0, Some("2024-06-20")),
            row("Sunita", 500.0, Some("2024-03-01")),
            row("Settled", 0.0, Some("2024-01-01")),
        ];
        let summary = OutstandingSummary::from_rows(&rows, today);
        assert_eq!(summary.customers, 2);
        assert_eq!(summary.orders, 4);
        assert_eq!(summary.balance_amount, 1500.0);
        assert_eq!(summary.bucket_amount(AgingBucket::Current), 1000.0);
        assert_eq!(summary.bucket_amount(AgingBucket::Over90), 500.0);
        assert_eq!(summary.collection_rate(), 50.0);
    }

    #[test]
    fn test_sort_and_search() {
        let mut rows = vec![
            row("sunita", 500.0, None),
            row("Ramesh", 1000.0, Some("2024-06-20")),
            row("Anil", 200.0, Some("2024-01-10")),
        ];
        OutstandingSort::BalanceDesc.apply(&mut rows);
        assert_eq!(rows[0].customer_name, "Ramesh");
        OutstandingSort::NameAsc.apply(&mut rows);
        assert_eq!(rows[2].customer_name, "sunita");
        OutstandingSort::OldestFirst.apply(&mut rows);
        assert_eq!(rows[0].customer_name, "Anil");
        assert_eq!(rows[2].customer_name, "sunita");
        assert!(rows[0].matches("ANI"));
        assert!(!rows[0].matches("wai"));
    }

    #[test]
    fn test_deserialize_row() {
        let raw = r#"{"customerName":"Ramesh","mobile":"9876543210","orders":3,"totalAmount":12000,"paidAmount":2000,"balanceAmount":10000,"oldestOrderDate":"2024-05-01"}"#;
        let row: OutstandingRow = serde_json::from_str(raw).unwrap();
        assert_eq!(row.balance_amount, 10000.0);
        assert_eq!(row.oldest_order_date, Some(date("2024-05-01")));
    }
}
