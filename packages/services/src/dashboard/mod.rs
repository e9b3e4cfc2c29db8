use std::fmt;

use models::directory::{
    clinician_seed, staff_seed, DirectoryMember, DirectoryTab, RowAction, DIRECTORY_COLUMNS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    RowOutOfRange { tab: DirectoryTab, row: usize, len: usize },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::RowOutOfRange { tab, row, len } => write!(
                f,
                "Row {} does not exist in the {:?} table ({} rows)",
                row, tab, len
            ),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Staff and clinician tables of the provider dashboard, held in memory only.
#[derive(Debug, Clone)]
pub struct Directory {
    tab: DirectoryTab,
    staff: Vec<DirectoryMember>,
    clinicians: Vec<DirectoryMember>,
    open_menu: Option<(DirectoryTab, usize)>,
}

impl Directory {
    pub fn new() -> Self {
        Directory {
            tab: DirectoryTab::default(),
            staff: staff_seed(),
            clinicians: clinician_seed(),
            open_menu: None,
        }
    }

    pub fn tab(&self) -> DirectoryTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DirectoryTab) {
        self.tab = tab;
        self.open_menu = None;
    }

    pub fn rows(&self, tab: DirectoryTab) -> &[DirectoryMember] {
        match tab {
            DirectoryTab::Staff => &self.staff,
            DirectoryTab::Clinician => &self.clinicians,
        }
    }

    /// Rows of the selected tab.
    pub fn visible_rows(&self) -> &[DirectoryMember] {
        self.rows(self.tab)
    }

    pub fn columns() -> &'static [(&'static str, &'static str)] {
        &DIRECTORY_COLUMNS
    }

    fn row_mut(
        &mut self,
        tab: DirectoryTab,
        row: usize,
    ) -> Result<&mut DirectoryMember, DirectoryError> {
        let rows = match tab {
            DirectoryTab::Staff => &mut self.staff,
            DirectoryTab::Clinician => &mut self.clinicians,
        };
        let len = rows.len();
        rows.get_mut(row)
            .ok_or(DirectoryError::RowOutOfRange { tab, row, len })
    }

    /// Flips a member between active and inactive.
    pub fn toggle_status(
        &mut self,
        tab: DirectoryTab,
        row: usize,
    ) -> Result<&DirectoryMember, DirectoryError> {
        let member = self.row_mut(tab, row)?;
        member.status = !member.status;
        tracing::debug!(?tab, row, active = member.status, "member status toggled");
        Ok(&*member)
    }

    pub fn open_menu(&mut self, tab: DirectoryTab, row: usize) -> Result<(), DirectoryError> {
        self.row_mut(tab, row)?;
        self.open_menu = Some((tab, row));
        Ok(())
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    pub fn menu(&self) -> Option<(DirectoryTab, usize)> {
        self.open_menu
    }

    /// Picking a menu entry only closes the menu.
    pub fn choose(&mut self, action: RowAction) {
        if let Some((tab, row)) = self.open_menu.take() {
            tracing::debug!(?tab, row, ?action, "row action chosen");
        }
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// Static landing view after a patient signs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientDashboard {
    pub title: &'static str,
    pub greeting: &'static str,
}

impl PatientDashboard {
    pub fn view() -> Self {
        PatientDashboard {
            title: "Patient Dashboard",
            greeting: "Welcome, Patient!",
        }
    }
}
