//! End-to-end persistence: migrate, run operations, persist, reload

use portal_core::model::{Metadata, Role};
use portal_core::ops::member_ops::{create_member, MemberDraft};
use portal_core::ops::provisioning::{provision_project, NewProjectInput};
use portal_core::Store;
use portal_store::repo::{load_store, SqliteRepo};
use portal_store::{db, migrations};

fn provisioned_store() -> (Store, String) {
    let mut store = Store::new();
    let member_id = create_member(
        &mut store,
        MemberDraft {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            role: Role::Teamlead,
            department: Some("Management".to_string()),
            phone: None,
            join_date: None,
            metadata: Metadata::new(),
        },
    )
    .unwrap();

    let receipt = provision_project(
        &mut store,
        NewProjectInput {
            client_name: "Meera Traders".to_string(),
            client_email: "accounts@meeratraders.in".to_string(),
            client_company: Some("Meera Traders Pvt Ltd".to_string()),
            client_phone: None,
            project_name: "Website revamp".to_string(),
            project_description: None,
            start_date: None,
            due_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            assigned_members: vec![member_id.clone()],
            payment_amount: Some(50_000.0),
            tax_rate: 18.0,
            created_by: Some(member_id.clone()),
        },
    )
    .unwrap();

    (store, receipt.project_id)
}

#[test]
fn on_disk_round_trip_preserves_provisioned_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.db");

    let (store, project_id) = provisioned_store();

    {
        let mut conn = db::open(&path).unwrap();
        db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        SqliteRepo::persist_store(&mut conn, &store).unwrap();
    }

    // Fresh connection, as a restarted process would open
    let conn = db::open(&path).unwrap();
    let loaded = load_store(&conn).unwrap();

    assert_eq!(loaded.list_members().len(), 1);
    assert_eq!(loaded.list_clients().len(), 1);
    assert_eq!(loaded.list_tasks().len(), 1);
    assert_eq!(loaded.list_invoices().len(), 1);
    assert_eq!(loaded.list_notifications().len(), 1);

    let project = loaded.get_project(&project_id).unwrap();
    assert_eq!(project.name, "Website revamp");

    let invoice = loaded.list_invoices()[0];
    assert_eq!(invoice.invoice_number, "INV-0001");
    assert!((invoice.effective_total() - 59_000.0).abs() < 1e-6);
}

#[test]
fn repeated_persist_is_stable() {
    let mut conn = db::open_in_memory().unwrap();
    migrations::apply_migrations(&mut conn).unwrap();

    let (store, _) = provisioned_store();

    SqliteRepo::persist_store(&mut conn, &store).unwrap();
    SqliteRepo::persist_store(&mut conn, &store).unwrap();

    let loaded = load_store(&conn).unwrap();
    assert_eq!(loaded.list_clients().len(), 1);
    assert_eq!(loaded.list_invoices().len(), 1);
}
