use std::collections::HashMap;

use crate::errors::{PortalError, Result};
use crate::model::{
    Campaign, ChatRecord, Client, FaqEntry, FestivalEvent, Invoice, Member, Notification, Project,
    SalaryRecord, Task,
};

/// In-memory store holding every portal collection
///
/// A simple HashMap-per-collection storage implementation. Not thread-safe
/// (no Arc/RwLock); callers that serve concurrent traffic wrap it themselves.
/// All storage access is encapsulated here so the persistence layer can
/// hydrate and drain it wholesale.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) members: HashMap<String, Member>,
    pub(crate) clients: HashMap<String, Client>,
    pub(crate) projects: HashMap<String, Project>,
    pub(crate) tasks: HashMap<String, Task>,
    pub(crate) invoices: HashMap<String, Invoice>,
    pub(crate) campaigns: HashMap<String, Campaign>,
    pub(crate) festivals: HashMap<String, FestivalEvent>,
    pub(crate) faqs: HashMap<String, FaqEntry>,
    pub(crate) chat_history: HashMap<String, ChatRecord>,
    pub(crate) notifications: HashMap<String, Notification>,
    pub(crate) salaries: HashMap<String, SalaryRecord>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Members (the `users` collection) =====

    /// Get a Member by ID
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the member doesn't exist.
    pub fn get_member(&self, id: &str) -> Result<&Member> {
        self.members
            .get(id)
            .ok_or_else(|| PortalError::MemberNotFound {
                member_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a Member by ID
    pub fn get_member_mut(&mut self, id: &str) -> Result<&mut Member> {
        self.members
            .get_mut(id)
            .ok_or_else(|| PortalError::MemberNotFound {
                member_id: id.to_string(),
            })
    }

    pub fn insert_member(&mut self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    pub fn remove_member(&mut self, id: &str) -> Result<Member> {
        self.members
            .remove(id)
            .ok_or_else(|| PortalError::MemberNotFound {
                member_id: id.to_string(),
            })
    }

    /// List all members, newest first
    pub fn list_members(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        members
    }

    pub fn member_exists(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    // ===== Clients =====

    /// Get a Client by ID
    ///
    /// # Errors
    ///
    /// Returns `ClientNotFound` if the client doesn't exist.
    pub fn get_client(&self, id: &str) -> Result<&Client> {
        self.clients
            .get(id)
            .ok_or_else(|| PortalError::ClientNotFound {
                client_id: id.to_string(),
            })
    }

    pub fn get_client_mut(&mut self, id: &str) -> Result<&mut Client> {
        self.clients
            .get_mut(id)
            .ok_or_else(|| PortalError::ClientNotFound {
                client_id: id.to_string(),
            })
    }

    pub fn insert_client(&mut self, client: Client) {
        self.clients.insert(client.id.clone(), client);
    }

    pub fn remove_client(&mut self, id: &str) -> Result<Client> {
        self.clients
            .remove(id)
            .ok_or_else(|| PortalError::ClientNotFound {
                client_id: id.to_string(),
            })
    }

    /// List all clients, newest first
    pub fn list_clients(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.values().collect();
        clients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        clients
    }

    // ===== Projects =====

    /// Get a Project by ID
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if the project doesn't exist.
    pub fn get_project(&self, id: &str) -> Result<&Project> {
        self.projects
            .get(id)
            .ok_or_else(|| PortalError::ProjectNotFound {
                project_id: id.to_string(),
            })
    }

    pub fn get_project_mut(&mut self, id: &str) -> Result<&mut Project> {
        self.projects
            .get_mut(id)
            .ok_or_else(|| PortalError::ProjectNotFound {
                project_id: id.to_string(),
            })
    }

    pub fn insert_project(&mut self, project: Project) {
        self.projects.insert(project.id.clone(), project);
    }

    pub fn remove_project(&mut self, id: &str) -> Result<Project> {
        self.projects
            .remove(id)
            .ok_or_else(|| PortalError::ProjectNotFound {
                project_id: id.to_string(),
            })
    }

    /// List all projects, newest first
    pub fn list_projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.values().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    // ===== Tasks =====

    /// Get a Task by ID
    ///
    /// # Errors
    ///
    /// Returns `TaskNotFound` if the task doesn't exist.
    pub fn get_task(&self, id: &str) -> Result<&Task> {
        self.tasks.get(id).ok_or_else(|| PortalError::TaskNotFound {
            task_id: id.to_string(),
        })
    }

    pub fn get_task_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .get_mut(id)
            .ok_or_else(|| PortalError::TaskNotFound {
                task_id: id.to_string(),
            })
    }

    pub fn insert_task(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        self.tasks
            .remove(id)
            .ok_or_else(|| PortalError::TaskNotFound {
                task_id: id.to_string(),
            })
    }

    /// List all tasks, newest first
    pub fn list_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.values().collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tasks
    }

    // ===== Invoices =====

    /// Get an Invoice by ID
    ///
    /// # Errors
    ///
    /// Returns `InvoiceNotFound` if the invoice doesn't exist.
    pub fn get_invoice(&self, id: &str) -> Result<&Invoice> {
        self.invoices
            .get(id)
            .ok_or_else(|| PortalError::InvoiceNotFound {
                invoice_id: id.to_string(),
            })
    }

    pub fn get_invoice_mut(&mut self, id: &str) -> Result<&mut Invoice> {
        self.invoices
            .get_mut(id)
            .ok_or_else(|| PortalError::InvoiceNotFound {
                invoice_id: id.to_string(),
            })
    }

    pub fn insert_invoice(&mut self, invoice: Invoice) {
        self.invoices.insert(invoice.id.clone(), invoice);
    }

    pub fn remove_invoice(&mut self, id: &str) -> Result<Invoice> {
        self.invoices
            .remove(id)
            .ok_or_else(|| PortalError::InvoiceNotFound {
                invoice_id: id.to_string(),
            })
    }

    /// List all invoices, newest first
    pub fn list_invoices(&self) -> Vec<&Invoice> {
        let mut invoices: Vec<&Invoice> = self.invoices.values().collect();
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        invoices
    }

    pub fn invoice_count(&self) -> usize {
        self.invoices.len()
    }

    // ===== Campaigns =====

    /// Get a Campaign by ID
    ///
    /// # Errors
    ///
    /// Returns `CampaignNotFound` if the campaign doesn't exist.
    pub fn get_campaign(&self, id: &str) -> Result<&Campaign> {
        self.campaigns
            .get(id)
            .ok_or_else(|| PortalError::CampaignNotFound {
                campaign_id: id.to_string(),
            })
    }

    pub fn get_campaign_mut(&mut self, id: &str) -> Result<&mut Campaign> {
        self.campaigns
            .get_mut(id)
            .ok_or_else(|| PortalError::CampaignNotFound {
                campaign_id: id.to_string(),
            })
    }

    pub fn insert_campaign(&mut self, campaign: Campaign) {
        self.campaigns.insert(campaign.id.clone(), campaign);
    }

    pub fn remove_campaign(&mut self, id: &str) -> Result<Campaign> {
        self.campaigns
            .remove(id)
            .ok_or_else(|| PortalError::CampaignNotFound {
                campaign_id: id.to_string(),
            })
    }

    /// List all campaigns, newest first
    pub fn list_campaigns(&self) -> Vec<&Campaign> {
        let mut campaigns: Vec<&Campaign> = self.campaigns.values().collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    // ===== Festival calendar =====

    pub fn get_festival(&self, id: &str) -> Result<&FestivalEvent> {
        self.festivals
            .get(id)
            .ok_or_else(|| PortalError::FestivalNotFound {
                festival_id: id.to_string(),
            })
    }

    pub fn insert_festival(&mut self, event: FestivalEvent) {
        self.festivals.insert(event.id.clone(), event);
    }

    pub fn remove_festival(&mut self, id: &str) -> Result<FestivalEvent> {
        self.festivals
            .remove(id)
            .ok_or_else(|| PortalError::FestivalNotFound {
                festival_id: id.to_string(),
            })
    }

    /// List festival events in calendar order
    pub fn list_festivals(&self) -> Vec<&FestivalEvent> {
        let mut events: Vec<&FestivalEvent> = self.festivals.values().collect();
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    // ===== Chatbot FAQs =====

    pub fn get_faq(&self, id: &str) -> Result<&FaqEntry> {
        self.faqs.get(id).ok_or_else(|| PortalError::FaqNotFound {
            faq_id: id.to_string(),
        })
    }

    pub fn insert_faq(&mut self, faq: FaqEntry) {
        self.faqs.insert(faq.id.clone(), faq);
    }

    pub fn remove_faq(&mut self, id: &str) -> Result<FaqEntry> {
        self.faqs.remove(id).ok_or_else(|| PortalError::FaqNotFound {
            faq_id: id.to_string(),
        })
    }

    /// List FAQ entries in stable (creation) order
    ///
    /// The matcher takes the first hit, so ordering must be deterministic.
    pub fn list_faqs(&self) -> Vec<&FaqEntry> {
        let mut faqs: Vec<&FaqEntry> = self.faqs.values().collect();
        faqs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        faqs
    }

    // ===== Chat history =====

    pub fn insert_chat_record(&mut self, record: ChatRecord) {
        self.chat_history.insert(record.id.clone(), record);
    }

    /// Chat history for one member, newest first
    pub fn chat_history_for(&self, member_id: &str) -> Vec<&ChatRecord> {
        let mut records: Vec<&ChatRecord> = self
            .chat_history
            .values()
            .filter(|r| r.member_id == member_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    pub fn list_chat_records(&self) -> Vec<&ChatRecord> {
        let mut records: Vec<&ChatRecord> = self.chat_history.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    // ===== Notifications =====

    pub fn get_notification(&self, id: &str) -> Result<&Notification> {
        self.notifications
            .get(id)
            .ok_or_else(|| PortalError::NotificationNotFound {
                notification_id: id.to_string(),
            })
    }

    pub fn get_notification_mut(&mut self, id: &str) -> Result<&mut Notification> {
        self.notifications
            .get_mut(id)
            .ok_or_else(|| PortalError::NotificationNotFound {
                notification_id: id.to_string(),
            })
    }

    pub fn insert_notification(&mut self, notification: Notification) {
        self.notifications
            .insert(notification.id.clone(), notification);
    }

    /// All notifications for one member, newest first (no limit applied here)
    pub fn notifications_for(&self, member_id: &str) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self
            .notifications
            .values()
            .filter(|n| n.member_id == member_id)
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn list_notifications(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.notifications.values().collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    // ===== Salaries =====

    pub fn get_salary(&self, id: &str) -> Result<&SalaryRecord> {
        self.salaries
            .get(id)
            .ok_or_else(|| PortalError::SalaryNotFound {
                salary_id: id.to_string(),
            })
    }

    pub fn insert_salary(&mut self, record: SalaryRecord) {
        self.salaries.insert(record.id.clone(), record);
    }

    /// Salary records for one member, newest first
    pub fn salaries_for(&self, member_id: &str) -> Vec<&SalaryRecord> {
        let mut records: Vec<&SalaryRecord> = self
            .salaries
            .values()
            .filter(|s| s.member_id == member_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    pub fn list_salaries(&self) -> Vec<&SalaryRecord> {
        let mut records: Vec<&SalaryRecord> = self.salaries.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }
}
