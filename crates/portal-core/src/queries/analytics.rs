//! Dashboard, revenue and task reductions
//!
//! All analytics are computed by linear scan over the in-memory store at
//! request time; nothing is cached or pre-aggregated.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{PaymentStatus, TaskStatus};
use crate::ops::Store;

/// Headline counts and revenue for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    pub total_clients: usize,
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub total_invoices: usize,
    pub paid_invoices: usize,
    pub pending_invoices: usize,
    pub overdue_invoices: usize,
    pub total_revenue: f64,
    pub paid_revenue: f64,
    pub pending_revenue: f64,
    pub total_members: usize,
    pub generated_at: DateTime<Utc>,
}

/// Revenue split by payment status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

/// Task counts plus completion rate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    /// Percent of tasks completed, rounded to two decimals
    pub completion_rate: f64,
}

/// Round to two decimal places, the precision the dashboard displays
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the dashboard analytics snapshot
pub fn dashboard_analytics(store: &Store) -> DashboardAnalytics {
    let tasks = task_stats(store);
    let revenue = revenue_summary(store);

    let invoices = store.list_invoices();
    let paid_invoices = invoices
        .iter()
        .filter(|i| i.payment_status == PaymentStatus::Paid)
        .count();
    let pending_invoices = invoices
        .iter()
        .filter(|i| i.payment_status == PaymentStatus::Pending)
        .count();
    let overdue_invoices = invoices
        .iter()
        .filter(|i| i.payment_status == PaymentStatus::Overdue)
        .count();

    let projects = store.list_projects();
    let active_projects = projects.iter().filter(|p| p.is_active()).count();

    DashboardAnalytics {
        total_clients: store.list_clients().len(),
        total_projects: projects.len(),
        active_projects,
        total_tasks: tasks.total,
        completed_tasks: tasks.completed,
        pending_tasks: tasks.pending,
        in_progress_tasks: tasks.in_progress,
        total_invoices: invoices.len(),
        paid_invoices,
        pending_invoices,
        overdue_invoices,
        total_revenue: revenue.total,
        paid_revenue: revenue.paid,
        pending_revenue: revenue.pending,
        total_members: store.list_members().len(),
        generated_at: Utc::now(),
    }
}

/// Sum invoice worth by payment status
///
/// Uses `effective_total()` so legacy flat-amount invoices count too.
pub fn revenue_summary(store: &Store) -> RevenueSummary {
    let mut summary = RevenueSummary {
        total: 0.0,
        paid: 0.0,
        pending: 0.0,
        overdue: 0.0,
    };

    for invoice in store.list_invoices() {
        let worth = invoice.effective_total();
        summary.total += worth;
        match invoice.payment_status {
            PaymentStatus::Paid => summary.paid += worth,
            PaymentStatus::Pending => summary.pending += worth,
            PaymentStatus::Overdue => summary.overdue += worth,
        }
    }

    summary.total = round2(summary.total);
    summary.paid = round2(summary.paid);
    summary.pending = round2(summary.pending);
    summary.overdue = round2(summary.overdue);
    summary
}

/// Task counts and completion rate across the whole store
pub fn task_stats(store: &Store) -> TaskStats {
    let tasks = store.list_tasks();
    let total = tasks.len();
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let in_progress = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let pending = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .count();

    let completion_rate = if total == 0 {
        0.0
    } else {
        round2(completed as f64 / total as f64 * 100.0)
    };

    TaskStats {
        total,
        completed,
        in_progress,
        pending,
        completion_rate,
    }
}
