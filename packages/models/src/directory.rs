use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DirectoryTab {
    #[default]
    Staff,
    Clinician,
}

/// Entries of the per-row action menu.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAction {
    Edit,
    Delete,
}

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    Staff,
    Clinician,
}

/// One row of the provider dashboard tables.
#[derive(SimpleObject, Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub role: MemberRole,
    pub npi: String,
    pub location: String,
    /// Active when true.
    pub status: bool,
}

/// Column headings shown above both tables, as `(id, label)`.
pub const DIRECTORY_COLUMNS: [(&str, &str); 8] = [
    ("name", "Name"),
    ("email", "Email Id"),
    ("contact", "Contact Number"),
    ("role", "Role"),
    ("npi", "NPI Number"),
    ("location", "Work Location"),
    ("status", "Status"),
    ("action", "Action"),
];

impl DirectoryMember {
    fn seed(
        name: &str,
        email: &str,
        contact: &str,
        role: MemberRole,
        npi: &str,
        location: &str,
        status: bool,
    ) -> Self {
        DirectoryMember {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            contact: contact.to_string(),
            role,
            npi: npi.to_string(),
            location: location.to_string(),
            status,
        }
    }
}

pub fn staff_seed() -> Vec<DirectoryMember> {
    vec![
        DirectoryMember::seed(
            "John Doe",
            "john.doe@example.com",
            "123-456-7890",
            MemberRole::Staff,
            "1234567890",
            "New York",
            true,
        ),
        DirectoryMember::seed(
            "Jane Smith",
            "jane.smith@example.com",
            "987-654-3210",
            MemberRole::Staff,
            "0987654321",
            "Los Angeles",
            false,
        ),
    ]
}

pub fn clinician_seed() -> Vec<DirectoryMember> {
    vec![
        DirectoryMember::seed(
            "Dr. Alice Brown",
            "alice.brown@example.com",
            "555-123-4567",
            MemberRole::Clinician,
            "1122334455",
            "Chicago",
            true,
        ),
        DirectoryMember::seed(
            "Dr. Bob White",
            "bob.white@example.com",
            "555-987-6543",
            MemberRole::Clinician,
            "5544332211",
            "Houston",
            false,
        ),
    ]
}
