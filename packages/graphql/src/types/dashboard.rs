use async_graphql::SimpleObject;
use models::directory::{DirectoryMember, DirectoryTab};
use services::{Directory, PatientDashboard};

#[derive(SimpleObject, Debug, Clone)]
pub struct DirectoryColumn {
    pub id: String,
    pub label: String,
}

#[derive(SimpleObject, Debug, Clone)]
pub struct PatientWelcome {
    pub title: String,
    pub greeting: String,
}

impl From<PatientDashboard> for PatientWelcome {
    fn from(view: PatientDashboard) -> Self {
        PatientWelcome {
            title: view.title.to_string(),
            greeting: view.greeting.to_string(),
        }
    }
}

/// The row whose action menu is open.
#[derive(SimpleObject, Debug, Clone)]
pub struct RowMenu {
    pub tab: DirectoryTab,
    pub row: u32,
}

/// Selected tab, its rows and the open row menu.
#[derive(SimpleObject, Debug, Clone)]
pub struct DirectoryView {
    pub tab: DirectoryTab,
    pub rows: Vec<DirectoryMember>,
    pub open_menu: Option<RowMenu>,
}

impl From<&Directory> for DirectoryView {
    fn from(directory: &Directory) -> Self {
        DirectoryView {
            tab: directory.tab(),
            rows: directory.visible_rows().to_vec(),
            open_menu: directory.menu().map(|(tab, row)| RowMenu {
                tab,
                row: row as u32,
            }),
        }
    }
}
