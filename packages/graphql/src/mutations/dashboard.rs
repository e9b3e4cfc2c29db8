use async_graphql::{Context, Object, Result, Union};
use models::directory::{DirectoryMember, DirectoryTab, RowAction};

use crate::errors::DirectoryErrorType;
use crate::types::DirectoryView;
use crate::utilities::SharedDirectory;

#[derive(Union)]
pub enum DirectoryMutationResult {
    Member(DirectoryMember),
    DirectoryError(DirectoryErrorType),
}

#[derive(Union)]
pub enum DirectoryViewResult {
    DirectoryView(DirectoryView),
    DirectoryError(DirectoryErrorType),
}

#[derive(Default)]
pub struct DashboardMutation;

#[Object]
impl DashboardMutation {
    /// Flips a row between active and inactive; the change is never synced anywhere
    async fn toggle_member_status(
        &self,
        ctx: &Context<'_>,
        tab: DirectoryTab,
        row: u32,
    ) -> Result<DirectoryMutationResult> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| match directory.toggle_status(tab, row as usize) {
            Ok(member) => DirectoryMutationResult::Member(member.clone()),
            Err(e) => DirectoryMutationResult::DirectoryError(e.into()),
        })
    }

    /// Switches the visible table and closes any open row menu
    async fn select_directory_tab(
        &self,
        ctx: &Context<'_>,
        tab: DirectoryTab,
    ) -> Result<DirectoryView> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| {
            directory.select_tab(tab);
            DirectoryView::from(&*directory)
        })
    }

    async fn open_row_menu(
        &self,
        ctx: &Context<'_>,
        tab: DirectoryTab,
        row: u32,
    ) -> Result<DirectoryViewResult> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| match directory.open_menu(tab, row as usize) {
            Ok(()) => DirectoryViewResult::DirectoryView(DirectoryView::from(&*directory)),
            Err(e) => DirectoryViewResult::DirectoryError(e.into()),
        })
    }

    async fn close_row_menu(&self, ctx: &Context<'_>) -> Result<DirectoryView> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| {
            directory.close_menu();
            DirectoryView::from(&*directory)
        })
    }

    /// Edit and Delete have no effect beyond closing the menu
    async fn choose_row_action(
        &self,
        ctx: &Context<'_>,
        action: RowAction,
    ) -> Result<DirectoryView> {
        let directory = ctx.data::<SharedDirectory>()?;
        directory.with(|directory| {
            directory.choose(action);
            DirectoryView::from(&*directory)
        })
    }
}
