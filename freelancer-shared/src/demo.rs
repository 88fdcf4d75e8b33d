//! Demo workspace
//!
//! [`load_demo_data`] replaces the stored document with a small, fixed
//! business (one user, three clients, three projects, four tasks, three
//! quotes, two contracts, three team members) and signs the demo user in.
//!
//! The demo account is `demo@freelancerpro.com` with password `demo123`.

use crate::auth::password::{self, PasswordError};
use crate::auth::Session;
use crate::models::user::User;
use crate::store::{AppData, DataStore, StoreError};
use serde_json::{json, Value};
use tracing::info;

pub const DEMO_EMAIL: &str = "demo@freelancerpro.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Error type for demo seeding
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to hash demo password: {0}")]
    Password(#[from] PasswordError),

    #[error("Demo document does not match the data model: {0}")]
    Template(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Builds the demo document with the given password hash
pub fn demo_document(password_hash: &str) -> Result<AppData, SeedError> {
    serde_json::from_value(demo_template(password_hash)).map_err(SeedError::Template)
}

/// Seeds the demo workspace and signs the demo user in
///
/// Whatever was stored before is replaced.
///
/// # Returns
///
/// The demo user with the password hash blanked
pub fn load_demo_data(store: &DataStore, session: &Session) -> Result<User, SeedError> {
    let hash = password::hash_password(DEMO_PASSWORD)?;
    let document = demo_document(&hash)?;

    store.save(&document)?;

    let user = document
        .users
        .into_iter()
        .next()
        .ok_or_else(|| SeedError::Template(serde::de::Error::custom("demo user missing")))?;
    session.set_current_user(Some(&user))?;

    info!(user_id = %user.id, "Loaded demo workspace");
    Ok(user.without_password())
}

fn demo_template(password_hash: &str) -> Value {
    json!({
        "users": [
            {
                "id": "demo-user-1",
                "email": DEMO_EMAIL,
                "name": "Demo User",
                "password": password_hash,
                "role": "freelancer",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z"
            }
        ],
        "clients": [
            {
                "id": "client-1",
                "name": "Tech Startup Inc.",
                "email": "contact@techstartup.com",
                "phone": "+1 (555) 123-4567",
                "company": "Tech Startup Inc.",
                "status": "active",
                "notes": "Very collaborative, always pays on time. Fintech focused.",
                "createdAt": "2024-01-15T00:00:00.000Z",
                "updatedAt": "2024-02-01T00:00:00.000Z",
                "userId": "demo-user-1"
            },
            {
                "id": "client-2",
                "name": "Maria Gonzalez",
                "email": "maria@thekitchen.com",
                "phone": "+1 (555) 987-6543",
                "company": "The Kitchen Restaurant",
                "status": "active",
                "notes": "Restaurant owner who needs an online presence. Cares a lot about quality.",
                "createdAt": "2024-01-20T00:00:00.000Z",
                "updatedAt": "2024-02-05T00:00:00.000Z",
                "userId": "demo-user-1"
            },
            {
                "id": "client-3",
                "name": "Carlos Mendoza",
                "email": "carlos@strategyconsulting.com",
                "phone": "+1 (555) 456-7890",
                "company": "Strategy Consulting",
                "status": "prospect",
                "notes": "Interested in a brand redesign. Meeting scheduled for next week.",
                "createdAt": "2024-02-10T00:00:00.000Z",
                "updatedAt": "2024-02-10T00:00:00.000Z",
                "userId": "demo-user-1"
            }
        ],
        "projects": [
            {
                "id": "project-1",
                "name": "FinTech Mobile App",
                "description": "Personal finance mobile app with bank integration.",
                "status": "active",
                "startDate": "2024-01-15T00:00:00.000Z",
                "endDate": "2024-04-15T00:00:00.000Z",
                "budget": 15000,
                "progress": 65,
                "createdAt": "2024-01-15T00:00:00.000Z",
                "updatedAt": "2024-02-15T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-1"
            },
            {
                "id": "project-2",
                "name": "Restaurant Website",
                "description": "Website with online reservations and a digital menu.",
                "status": "active",
                "startDate": "2024-02-01T00:00:00.000Z",
                "endDate": "2024-03-15T00:00:00.000Z",
                "budget": 3500,
                "progress": 40,
                "createdAt": "2024-02-01T00:00:00.000Z",
                "updatedAt": "2024-02-20T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-2"
            },
            {
                "id": "project-3",
                "name": "Full E-commerce Store",
                "description": "Online store with cart, payment gateway and admin panel.",
                "status": "completed",
                "startDate": "2023-11-01T00:00:00.000Z",
                "endDate": "2024-01-30T00:00:00.000Z",
                "budget": 8000,
                "progress": 100,
                "createdAt": "2023-11-01T00:00:00.000Z",
                "updatedAt": "2024-01-30T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-1"
            }
        ],
        "tasks": [
            {
                "id": "task-1",
                "title": "Design app wireframes",
                "description": "Detailed wireframes for every screen of the mobile app.",
                "status": "completed",
                "priority": "high",
                "dueDate": "2024-02-01T00:00:00.000Z",
                "createdAt": "2024-01-15T00:00:00.000Z",
                "updatedAt": "2024-01-28T00:00:00.000Z",
                "userId": "demo-user-1",
                "projectId": "project-1",
                "assigneeId": "member-1"
            },
            {
                "id": "task-2",
                "title": "Implement authentication",
                "description": "Login and sign-up with email validation.",
                "status": "in_progress",
                "priority": "high",
                "dueDate": "2024-02-25T00:00:00.000Z",
                "createdAt": "2024-02-01T00:00:00.000Z",
                "updatedAt": "2024-02-15T00:00:00.000Z",
                "userId": "demo-user-1",
                "projectId": "project-1",
                "assigneeId": "member-2"
            },
            {
                "id": "task-3",
                "title": "Food photography",
                "description": "Professional photo shoot for the restaurant menu.",
                "status": "pending",
                "priority": "medium",
                "dueDate": "2024-02-28T00:00:00.000Z",
                "createdAt": "2024-02-05T00:00:00.000Z",
                "updatedAt": "2024-02-05T00:00:00.000Z",
                "userId": "demo-user-1",
                "projectId": "project-2"
            },
            {
                "id": "task-4",
                "title": "SEO optimization",
                "description": "Improve search ranking and page load times.",
                "status": "pending",
                "priority": "low",
                "dueDate": "2024-03-10T00:00:00.000Z",
                "createdAt": "2024-02-10T00:00:00.000Z",
                "updatedAt": "2024-02-10T00:00:00.000Z",
                "userId": "demo-user-1",
                "projectId": "project-2"
            }
        ],
        "quotes": [
            {
                "id": "quote-1",
                "title": "Corporate Brand Redesign",
                "description": "Full visual identity redesign: logo, palette, typography and brand guide.",
                "amount": 2800,
                "status": "sent",
                "validUntil": "2024-03-15T00:00:00.000Z",
                "createdAt": "2024-02-10T00:00:00.000Z",
                "updatedAt": "2024-02-10T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-3"
            },
            {
                "id": "quote-2",
                "title": "FinTech Mobile App",
                "description": "iOS and Android app with backend, bank integration and admin panel.",
                "amount": 15000,
                "status": "accepted",
                "validUntil": "2024-01-30T00:00:00.000Z",
                "createdAt": "2024-01-10T00:00:00.000Z",
                "updatedAt": "2024-01-15T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-1",
                "projectId": "project-1"
            },
            {
                "id": "quote-3",
                "title": "Website with Reservations",
                "description": "Responsive website with online reservations, digital menu and social links.",
                "amount": 3500,
                "status": "accepted",
                "validUntil": "2024-02-15T00:00:00.000Z",
                "createdAt": "2024-01-25T00:00:00.000Z",
                "updatedAt": "2024-02-01T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-2",
                "projectId": "project-2"
            }
        ],
        "contracts": [
            {
                "id": "contract-1",
                "title": "FinTech App Development Agreement",
                "content": "SOFTWARE DEVELOPMENT AGREEMENT\n\nDeveloper: FreelancerPro Demo\nClient: Tech Startup Inc.\n\nScope: native iOS and Android app, REST backend, bank integration, admin panel, testing and documentation.\n\nTimeline: 12 weeks from signature.\n\nPrice: $15,000 USD, paid 30% on signature, 40% at half-way, 30% on delivery.\n\nWarranty: 60 days after final delivery.",
                "status": "signed",
                "signedDate": "2024-01-15T00:00:00.000Z",
                "createdAt": "2024-01-10T00:00:00.000Z",
                "updatedAt": "2024-01-15T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-1",
                "projectId": "project-1"
            },
            {
                "id": "contract-2",
                "title": "Restaurant Website Agreement",
                "content": "WEB DEVELOPMENT AGREEMENT\n\nDeveloper: FreelancerPro Demo\nClient: The Kitchen Restaurant\n\nServices: responsive design, online reservations, digital menu, basic SEO, staff training.\n\nPrice: $3,500 USD, 50% upfront and 50% on delivery.\n\nDelivery: 6 weeks.",
                "status": "signed",
                "signedDate": "2024-02-01T00:00:00.000Z",
                "createdAt": "2024-01-28T00:00:00.000Z",
                "updatedAt": "2024-02-01T00:00:00.000Z",
                "userId": "demo-user-1",
                "clientId": "client-2",
                "projectId": "project-2"
            }
        ],
        "teamMembers": [
            {
                "id": "member-1",
                "name": "Ana Rodriguez",
                "email": "ana@freelancerpro.com",
                "role": "UI/UX Designer",
                "status": "active",
                "createdAt": "2024-01-20T00:00:00.000Z",
                "updatedAt": "2024-01-20T00:00:00.000Z",
                "userId": "demo-user-1"
            },
            {
                "id": "member-2",
                "name": "Roberto Silva",
                "email": "roberto@freelancerpro.com",
                "role": "Backend Developer",
                "status": "active",
                "createdAt": "2024-01-25T00:00:00.000Z",
                "updatedAt": "2024-01-25T00:00:00.000Z",
                "userId": "demo-user-1"
            },
            {
                "id": "member-3",
                "name": "Laura Martinez",
                "email": "laura@freelancerpro.com",
                "role": "Community Manager",
                "status": "inactive",
                "createdAt": "2024-02-01T00:00:00.000Z",
                "updatedAt": "2024-02-15T00:00:00.000Z",
                "userId": "demo-user-1"
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::TaskStatus;

    #[test]
    fn test_demo_document_counts() {
        let document = demo_document("hash").unwrap();

        assert_eq!(document.users.len(), 1);
        assert_eq!(document.clients.len(), 3);
        assert_eq!(document.projects.len(), 3);
        assert_eq!(document.tasks.len(), 4);
        assert_eq!(document.quotes.len(), 3);
        assert_eq!(document.contracts.len(), 2);
        assert_eq!(document.team_members.len(), 3);
        assert_eq!(document.tasks[1].status, TaskStatus::InProgress);
    }

    #[test]
    fn test_demo_records_belong_to_demo_user() {
        let document = demo_document("hash").unwrap();
        let owner = &document.users[0].id;

        assert!(document.clients.iter().all(|c| &c.user_id == owner));
        assert!(document.tasks.iter().all(|t| &t.user_id == owner));
        assert!(document.team_members.iter().all(|m| &m.user_id == owner));
    }

    #[test]
    fn test_load_demo_data_signs_in() {
        let store = DataStore::in_memory();
        let session = Session::new(store.backend());

        let user = load_demo_data(&store, &session).unwrap();

        assert_eq!(user.email, DEMO_EMAIL);
        assert!(user.password.is_empty());
        assert_eq!(session.current_user().map(|u| u.id), Some(user.id));
        assert!(store.has_data());
    }
}
