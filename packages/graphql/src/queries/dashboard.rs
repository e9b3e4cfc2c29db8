use async_graphql::{Context, Object, Result};
use models::directory::{DirectoryMember, DirectoryTab};
use services::{Directory, PatientDashboard};

use crate::types::{DirectoryColumn, DirectoryView, PatientWelcome};
use crate::utilities::SharedDirectory;

#[derive(Default)]
pub struct DashboardQueries;

#[Object]
impl DashboardQueries {
    /// Rows of one dashboard table; defaults to the selected tab
    async fn directory(
        &self,
        ctx: &Context<'_>,
        tab: Option<DirectoryTab>,
    ) -> Result<Vec<DirectoryMember>> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| match tab {
            Some(tab) => directory.rows(tab).to_vec(),
            None => directory.visible_rows().to_vec(),
        })
    }

    async fn directory_view(&self, ctx: &Context<'_>) -> Result<DirectoryView> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| DirectoryView::from(&*directory))
    }

    async fn directory_columns(&self) -> Vec<DirectoryColumn> {
        Directory::columns()
            .iter()
            .map(|(id, label)| DirectoryColumn {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect()
    }

    async fn patient_dashboard(&self) -> PatientWelcome {
        PatientDashboard::view().into()
    }
}
