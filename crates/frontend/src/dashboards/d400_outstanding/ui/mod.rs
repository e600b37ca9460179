mod dashboard;

pub use dashboard::OutstandingDashboard;
