use crate::db::sheet::{Sheet, SheetDef, StoreError};
use crate::db::workbook::Workbook;
use crate::libs::activity::ActivityItem;

pub const ACTIVITY_ITEMS_SHEET: SheetDef = SheetDef {
    name: "activity_items",
    file: "activity_items.csv",
    headers: &["name", "color"],
};

/// Starter pick list seeded by `manabi init`; deployments edit the sheet to
/// match their curriculum.
pub const DEFAULT_ACTIVITY_ITEMS: [(&str, &str); 6] = [
    ("Language arts", "#ede266"),
    ("Kanji practice", "#73f256"),
    ("English", "#36b7f7"),
    ("Math", "#8843f7"),
    ("Reading", "#f2a254"),
    ("Journal", "#a4a4a4"),
];

/// Repository for the activity items sheet.
pub struct ActivityItems {
    sheet: Sheet,
}

impl ActivityItems {
    pub fn new() -> Result<Self, StoreError> {
        Ok(ActivityItems {
            sheet: Workbook::new()?.sheet(&ACTIVITY_ITEMS_SHEET),
        })
    }

    pub fn init(&self) -> Result<bool, StoreError> {
        let created = self.sheet.ensure()?;
        if created {
            for (name, color) in DEFAULT_ACTIVITY_ITEMS {
                self.sheet.append_row(&[name.to_string(), color.to_string()])?;
            }
        }
        Ok(created)
    }

    pub fn verify(&self) -> Result<(), StoreError> {
        self.sheet.verify_headers()
    }

    pub fn fetch(&self) -> Result<Vec<ActivityItem>, StoreError> {
        Ok(self
            .sheet
            .read_rows()?
            .iter()
            .map(|row| ActivityItem {
                name: row.get(0).unwrap_or_default().trim().to_string(),
                color: row.get(1).unwrap_or_default().trim().to_string(),
            })
            .filter(|item| !item.name.is_empty())
            .collect())
    }
}
