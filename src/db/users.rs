use crate::db::sheet::{Sheet, SheetDef, StoreError};
use crate::db::workbook::Workbook;
use crate::libs::user::{Role, User};
use std::str::FromStr;

pub const USERS_SHEET: SheetDef = SheetDef {
    name: "users",
    file: "users.csv",
    headers: &["id", "name", "belonging", "role"],
};

/// Repository for the users sheet.
///
/// The application never writes here: accounts are managed by a teacher
/// editing the sheet directly.
pub struct Users {
    sheet: Sheet,
}

impl Users {
    pub fn new() -> Result<Self, StoreError> {
        Ok(Users {
            sheet: Workbook::new()?.sheet(&USERS_SHEET),
        })
    }

    pub fn init(&self) -> Result<bool, StoreError> {
        self.sheet.ensure()
    }

    pub fn verify(&self) -> Result<(), StoreError> {
        self.sheet.verify_headers()
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn fetch_all(&self) -> Result<Vec<User>, StoreError> {
        let mut users = Vec::new();
        for (i, row) in self.sheet.read_rows()?.iter().enumerate() {
            let id = row.get(0).unwrap_or_default().trim().to_string();
            if id.is_empty() {
                continue;
            }
            let role_cell = row.get(3).unwrap_or_default().trim().to_string();
            let role = Role::from_str(&role_cell)
                .map_err(|_| self.sheet.bad_row(i, format!("unknown role \"{}\"", role_cell)))?;
            users.push(User {
                id,
                name: row.get(1).unwrap_or_default().trim().to_string(),
                belonging: row.get(2).unwrap_or_default().trim().to_string(),
                role,
            });
        }
        Ok(users)
    }

    pub fn fetch_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.fetch_all()?.into_iter().find(|u| u.id == user_id.trim()))
    }
}
