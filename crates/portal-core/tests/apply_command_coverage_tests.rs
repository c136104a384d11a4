//! Command coverage through the apply boundary
//!
//! Every command family is driven through `apply()` end to end, checking
//! both the resulting state and that the input state is never mutated.

use chrono::NaiveDate;
use portal_core::model::{
    CampaignStatus, Metadata, NotificationKind, PaymentStatus, ProjectStatus, Role, TaskStatus,
};
use portal_core::ops::campaign_ops::{CampaignDraft, CampaignUpdate, FestivalDraft};
use portal_core::ops::chatbot_ops::FaqDraft;
use portal_core::ops::client_ops::{ClientDraft, ClientUpdate};
use portal_core::ops::invoice_ops::InvoiceDraft;
use portal_core::ops::member_ops::{MemberDraft, MemberUpdate};
use portal_core::ops::project_ops::ProjectDraft;
use portal_core::ops::salary_ops::SalaryDraft;
use portal_core::ops::task_ops::{TaskDraft, TaskUpdate};
use portal_core::{apply, Command, PortalError, Store};

fn member_draft(name: &str, email: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Member,
        department: Some("Research".to_string()),
        phone: None,
        join_date: None,
        metadata: Metadata::new(),
    }
}

fn store_with_member() -> (Store, String) {
    let store = apply(
        &Store::new(),
        Command::MemberCreate {
            draft: member_draft("Asha Rao", "asha@example.com"),
        },
    )
    .unwrap();
    let id = store.list_members()[0].id.clone();
    (store, id)
}

#[test]
fn test_member_lifecycle() {
    let (state, member_id) = store_with_member();

    let state = apply(
        &state,
        Command::MemberUpdate {
            member_id: member_id.clone(),
            update: MemberUpdate {
                department: Some("Design".to_string()),
                ..Default::default()
            },
        },
    )
    .unwrap();
    assert_eq!(
        state.get_member(&member_id).unwrap().department.as_deref(),
        Some("Design")
    );

    let state = apply(&state, Command::MemberDelete { member_id }).unwrap();
    assert!(state.list_members().is_empty());
}

#[test]
fn test_client_lifecycle() {
    let state = apply(
        &Store::new(),
        Command::ClientCreate {
            draft: ClientDraft {
                name: "Meera Traders".to_string(),
                email: "accounts@meera.in".to_string(),
                ..Default::default()
            },
        },
    )
    .unwrap();
    let client_id = state.list_clients()[0].id.clone();

    let state = apply(
        &state,
        Command::ClientUpdate {
            client_id: client_id.clone(),
            update: ClientUpdate {
                company: Some("Meera Traders Pvt Ltd".to_string()),
                ..Default::default()
            },
        },
    )
    .unwrap();
    assert_eq!(
        state.get_client(&client_id).unwrap().company.as_deref(),
        Some("Meera Traders Pvt Ltd")
    );

    let state = apply(&state, Command::ClientDelete { client_id }).unwrap();
    assert!(state.list_clients().is_empty());
}

#[test]
fn test_project_create_and_status_update() {
    let state = apply(
        &Store::new(),
        Command::ProjectCreate {
            draft: ProjectDraft {
                name: "Inventory Portal".to_string(),
                description: None,
                client_id: "client-1".to_string(),
                status: None,
                start_date: None,
                due_date: None,
                assigned_members: Vec::new(),
                created_by: None,
                metadata: Metadata::new(),
            },
        },
    )
    .unwrap();
    let project_id = state.list_projects()[0].id.clone();
    assert_eq!(
        state.get_project(&project_id).unwrap().status,
        ProjectStatus::Planning
    );

    let state = apply(
        &state,
        Command::ProjectUpdate {
            project_id: project_id.clone(),
            update: portal_core::ops::project_ops::ProjectUpdate {
                status: Some(ProjectStatus::Ongoing),
                ..Default::default()
            },
        },
    )
    .unwrap();
    assert_eq!(
        state.get_project(&project_id).unwrap().status,
        ProjectStatus::Ongoing
    );

    let state = apply(&state, Command::ProjectDelete { project_id }).unwrap();
    assert!(state.list_projects().is_empty());
}

#[test]
fn test_task_assign_requires_member() {
    let (state, member_id) = store_with_member();
    let state = apply(
        &state,
        Command::TaskCreate {
            draft: TaskDraft {
                title: "Prepare quarterly deck".to_string(),
                ..Default::default()
            },
        },
    )
    .unwrap();
    let task_id = state.list_tasks()[0].id.clone();

    let result = apply(
        &state,
        Command::TaskAssign {
            task_id: task_id.clone(),
            member_id: "ghost".to_string(),
            assigned_by: None,
        },
    );
    assert!(matches!(result, Err(PortalError::MemberNotFound { .. })));

    let state = apply(
        &state,
        Command::TaskAssign {
            task_id: task_id.clone(),
            member_id: member_id.clone(),
            assigned_by: Some(member_id.clone()),
        },
    )
    .unwrap();
    assert_eq!(
        state.get_task(&task_id).unwrap().assigned_to.as_deref(),
        Some(member_id.as_str())
    );
}

#[test]
fn test_task_status_progression() {
    let state = apply(
        &Store::new(),
        Command::TaskCreate {
            draft: TaskDraft {
                title: "Prepare quarterly deck".to_string(),
                ..Default::default()
            },
        },
    )
    .unwrap();
    let task_id = state.list_tasks()[0].id.clone();
    assert_eq!(state.get_task(&task_id).unwrap().status, TaskStatus::Pending);

    let state = apply(
        &state,
        Command::TaskUpdate {
            task_id: task_id.clone(),
            update: TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        },
    )
    .unwrap();
    let task = state.get_task(&task_id).unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert!(task.completed_at.is_some());

    let state = apply(&state, Command::TaskDelete { task_id }).unwrap();
    assert!(state.list_tasks().is_empty());
}

#[test]
fn test_invoice_payment_transitions() {
    let state = apply(
        &Store::new(),
        Command::InvoiceCreate {
            draft: InvoiceDraft {
                amount: Some(12_000.0),
                ..Default::default()
            },
        },
    )
    .unwrap();
    let invoice_id = state.list_invoices()[0].id.clone();
    assert_eq!(
        state.get_invoice(&invoice_id).unwrap().payment_status,
        PaymentStatus::Pending
    );

    let overdue = apply(
        &state,
        Command::InvoiceMarkOverdue {
            invoice_id: invoice_id.clone(),
        },
    )
    .unwrap();
    assert_eq!(
        overdue.get_invoice(&invoice_id).unwrap().payment_status,
        PaymentStatus::Overdue
    );

    // Paid is reachable from overdue, and is terminal
    let paid = apply(
        &overdue,
        Command::InvoiceMarkPaid {
            invoice_id: invoice_id.clone(),
        },
    )
    .unwrap();
    let invoice = paid.get_invoice(&invoice_id).unwrap();
    assert_eq!(invoice.payment_status, PaymentStatus::Paid);
    assert!(invoice.paid_at.is_some());

    let again = apply(
        &paid,
        Command::InvoiceMarkPaid {
            invoice_id: invoice_id.clone(),
        },
    );
    assert!(matches!(
        again,
        Err(PortalError::InvalidStatusTransition { .. })
    ));

    let state = apply(&paid, Command::InvoiceDelete { invoice_id }).unwrap();
    assert!(state.list_invoices().is_empty());
}

#[test]
fn test_campaign_and_festival_commands() {
    let state = apply(
        &Store::new(),
        Command::CampaignCreate {
            draft: CampaignDraft {
                name: "Diwali Promo".to_string(),
                ..Default::default()
            },
        },
    )
    .unwrap();
    let campaign_id = state.list_campaigns()[0].id.clone();

    let state = apply(
        &state,
        Command::CampaignUpdate {
            campaign_id: campaign_id.clone(),
            update: CampaignUpdate {
                status: Some(CampaignStatus::Active),
                ..Default::default()
            },
        },
    )
    .unwrap();
    assert_eq!(
        state.get_campaign(&campaign_id).unwrap().status,
        CampaignStatus::Active
    );

    let state = apply(
        &state,
        Command::FestivalAdd {
            draft: FestivalDraft {
                name: "Diwali".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 11, 8).unwrap(),
                description: None,
                category: Some("religious".to_string()),
                marketing_ideas: Vec::new(),
                metadata: Metadata::new(),
            },
        },
    )
    .unwrap();
    let festival_id = state.list_festivals()[0].id.clone();

    let state = apply(&state, Command::FestivalRemove { festival_id }).unwrap();
    assert!(state.list_festivals().is_empty());

    let state = apply(&state, Command::CampaignDelete { campaign_id }).unwrap();
    assert!(state.list_campaigns().is_empty());
}

#[test]
fn test_faq_commands() {
    let state = apply(
        &Store::new(),
        Command::FaqAdd {
            draft: FaqDraft {
                question: "How do I create an invoice?".to_string(),
                answer: "Open Finance and press New Invoice.".to_string(),
                category: "finance".to_string(),
                module: None,
                keywords: vec!["invoice".to_string()],
            },
        },
    )
    .unwrap();
    let faq_id = state.list_faqs()[0].id.clone();

    let state = apply(&state, Command::FaqDelete { faq_id }).unwrap();
    assert!(state.list_faqs().is_empty());
}

#[test]
fn test_notification_commands() {
    let (state, member_id) = store_with_member();

    let mut state = state;
    for n in 0..3 {
        state = apply(
            &state,
            Command::NotificationSend {
                member_id: member_id.clone(),
                title: format!("Update {}", n),
                message: "Check the dashboard".to_string(),
                kind: NotificationKind::System,
            },
        )
        .unwrap();
    }
    assert_eq!(state.notifications_for(&member_id).len(), 3);

    let first_id = state.notifications_for(&member_id)[0].id.clone();
    let state = apply(
        &state,
        Command::NotificationMarkRead {
            notification_id: first_id.clone(),
        },
    )
    .unwrap();
    assert!(state
        .notifications_for(&member_id)
        .iter()
        .find(|n| n.id == first_id)
        .unwrap()
        .read);

    let state = apply(&state, Command::NotificationMarkAllRead { member_id: member_id.clone() })
        .unwrap();
    assert!(state.notifications_for(&member_id).iter().all(|n| n.read));
}

#[test]
fn test_salary_command_requires_member() {
    let (state, member_id) = store_with_member();

    let bad = apply(
        &state,
        Command::SalaryRecord {
            draft: SalaryDraft {
                member_id: "ghost".to_string(),
                month: "2026-08".to_string(),
                base_amount: 85_000.0,
                task_hours: 0.0,
                total: None,
                notes: None,
            },
        },
    );
    assert!(matches!(bad, Err(PortalError::MemberNotFound { .. })));

    let state = apply(
        &state,
        Command::SalaryRecord {
            draft: SalaryDraft {
                member_id: member_id.clone(),
                month: "2026-08".to_string(),
                base_amount: 85_000.0,
                task_hours: 160.0,
                total: None,
                notes: Some("August payroll".to_string()),
            },
        },
    )
    .unwrap();
    assert_eq!(state.salaries_for(&member_id).len(), 1);
}
