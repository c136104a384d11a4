use uuid::Uuid;

use super::store::Store;
use crate::errors::Result;
use crate::model::{Notification, NotificationKind};

/// Page size for notification listings
pub const NOTIFICATION_PAGE_LIMIT: usize = 50;

/// Send a notification to a member
///
/// The recipient must exist.
///
/// # Returns
/// The ID of the new notification
///
/// # Errors
/// * `MemberNotFound` - If the recipient doesn't exist
pub fn send_notification(
    store: &mut Store,
    member_id: &str,
    title: impl Into<String>,
    message: impl Into<String>,
    kind: NotificationKind,
) -> Result<String> {
    store.get_member(member_id)?;

    let notification_id = Uuid::now_v7().to_string();
    store.insert_notification(Notification::new(
        notification_id.clone(),
        member_id.to_string(),
        title.into(),
        message.into(),
        kind,
    ));
    Ok(notification_id)
}

/// The most recent notifications for a member, newest first, capped at
/// `NOTIFICATION_PAGE_LIMIT`
pub fn recent_notifications<'a>(store: &'a Store, member_id: &str) -> Vec<&'a Notification> {
    let mut notifications = store.notifications_for(member_id);
    notifications.truncate(NOTIFICATION_PAGE_LIMIT);
    notifications
}

/// Count of unread notifications for a member
pub fn unread_count(store: &Store, member_id: &str) -> usize {
    store
        .notifications_for(member_id)
        .iter()
        .filter(|n| !n.read)
        .count()
}

/// Mark one notification read, stamping `read_at`
///
/// # Errors
/// * `NotificationNotFound` - If the notification doesn't exist
pub fn mark_notification_read(store: &mut Store, id: &str) -> Result<()> {
    store.get_notification_mut(id)?.mark_read();
    Ok(())
}

/// Mark every unread notification for a member read
///
/// # Returns
/// The number of notifications that changed state
pub fn mark_all_read(store: &mut Store, member_id: &str) -> usize {
    let mut changed = 0;
    for notification in store.notifications.values_mut() {
        if notification.member_id == member_id && !notification.read {
            notification.mark_read();
            changed += 1;
        }
    }
    changed
}
