//! Modal form state: field templates per entity type, keystroke-level
//! editing, and parsing of submitted values into new domain records.
//!
//! Forms are rebuilt fresh on every open and dropped whole on close, so
//! no stale values can leak between openings.

use crate::model::{ListingStatus, Priority};

/// Which entity a form creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Listing,
    Rent,
    Maintenance,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Listing, EntityKind::Rent, EntityKind::Maintenance];

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Listing => "Listing",
            EntityKind::Rent => "Rent",
            EntityKind::Maintenance => "Maintenance",
        }
    }
}

/// What a field accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; `required` fields must be non-empty to submit
    Text { required: bool },
    /// Digits only; empty parses as 0
    Number,
    /// One of a fixed option list
    Select(&'static [&'static str]),
}

/// One form field with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
    /// Text/Number: the typed value. Select: ignored.
    pub value: String,
    /// Select: index into the option list
    pub selected: usize,
}

impl FormField {
    fn text(label: &'static str) -> Self {
        FormField {
            label,
            kind: FieldKind::Text { required: true },
            value: String::new(),
            selected: 0,
        }
    }

    fn optional_text(label: &'static str) -> Self {
        FormField {
            label,
            kind: FieldKind::Text { required: false },
            value: String::new(),
            selected: 0,
        }
    }

    fn number(label: &'static str) -> Self {
        FormField {
            label,
            kind: FieldKind::Number,
            value: String::new(),
            selected: 0,
        }
    }

    fn select(label: &'static str, options: &'static [&'static str]) -> Self {
        FormField {
            label,
            kind: FieldKind::Select(options),
            value: String::new(),
            selected: 0,
        }
    }

    /// The option currently chosen (Select fields only)
    pub fn selected_option(&self) -> &'static str {
        match self.kind {
            FieldKind::Select(options) => options[self.selected.min(options.len() - 1)],
            _ => "",
        }
    }

    /// Cycle a Select field forward or backward
    pub fn cycle(&mut self, forward: bool) {
        if let FieldKind::Select(options) = self.kind {
            let len = options.len();
            self.selected = if forward {
                (self.selected + 1) % len
            } else {
                (self.selected + len - 1) % len
            };
        }
    }

    /// Type a character; numbers accept digits only
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text { .. } => self.value.push(c),
            FieldKind::Number => {
                if c.is_ascii_digit() {
                    self.value.push(c);
                }
            }
            FieldKind::Select(_) => {}
        }
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

/// A parsed, validated form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Listing {
        name: String,
        address: String,
        status: ListingStatus,
        rent: u32,
    },
    Rent {
        property: String,
        tenant: String,
        amount: u32,
        due: String,
    },
    Maintenance {
        property: String,
        issue: String,
        priority: Priority,
        eta: String,
    },
}

/// Live state of the modal form overlay
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: &'static str,
    pub kind: EntityKind,
    /// Quick-add forms carry a leading type-selector field; changing it
    /// swaps the remaining field set
    pub quick: bool,
    pub fields: Vec<FormField>,
    /// Focused field index (includes the type selector when quick)
    pub focus: usize,
    /// Validation message shown until the next keystroke
    pub error: Option<String>,
}

const STATUS_OPTIONS: &[&str] = &["Occupied", "Available"];
const PRIORITY_OPTIONS: &[&str] = &["High", "Medium", "Low"];
const TYPE_OPTIONS: &[&str] = &["Listing", "Rent", "Maintenance"];

fn listing_fields() -> Vec<FormField> {
    vec![
        FormField::text("Listing name"),
        FormField::text("Address"),
        FormField::select("Status", STATUS_OPTIONS),
        FormField::number("Monthly rent"),
    ]
}

/// Quick-add listing template: no status selector, status fixed to
/// Available at parse time
fn quick_listing_fields() -> Vec<FormField> {
    vec![
        FormField::text("Listing name"),
        FormField::text("Address"),
        FormField::number("Monthly rent"),
    ]
}

fn rent_fields() -> Vec<FormField> {
    vec![
        FormField::text("Property"),
        FormField::text("Tenant"),
        FormField::number("Amount"),
        FormField::optional_text("Due date"),
    ]
}

fn maintenance_fields() -> Vec<FormField> {
    vec![
        FormField::text("Property"),
        FormField::text("Issue"),
        FormField::select("Priority", PRIORITY_OPTIONS),
        FormField::optional_text("ETA"),
    ]
}

impl FormState {
    pub fn add_listing() -> Self {
        FormState {
            title: "Add listing",
            kind: EntityKind::Listing,
            quick: false,
            fields: listing_fields(),
            focus: 0,
            error: None,
        }
    }

    pub fn add_rent() -> Self {
        FormState {
            title: "Add rent record",
            kind: EntityKind::Rent,
            quick: false,
            fields: rent_fields(),
            focus: 0,
            error: None,
        }
    }

    pub fn new_request() -> Self {
        FormState {
            title: "New maintenance request",
            kind: EntityKind::Maintenance,
            quick: false,
            fields: maintenance_fields(),
            focus: 0,
            error: None,
        }
    }

    /// Quick add starts on the type selector with the listing template
    pub fn quick_add() -> Self {
        let mut fields = vec![FormField::select("Add type", TYPE_OPTIONS)];
        fields.extend(quick_listing_fields());
        FormState {
            title: "Quick add",
            kind: EntityKind::Listing,
            quick: true,
            fields,
            focus: 0,
            error: None,
        }
    }

    /// Swap the quick-add field set to the template for the type selector's
    /// current choice, discarding any values typed into the old set
    pub fn sync_quick_fields(&mut self) {
        if !self.quick {
            return;
        }
        let kind = EntityKind::ALL[self.fields[0].selected.min(2)];
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.fields.truncate(1);
        self.fields.extend(match kind {
            EntityKind::Listing => quick_listing_fields(),
            EntityKind::Rent => rent_fields(),
            EntityKind::Maintenance => maintenance_fields(),
        });
        self.focus = self.focus.min(self.fields.len() - 1);
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    fn entity_fields(&self) -> &[FormField] {
        if self.quick { &self.fields[1..] } else { &self.fields }
    }

    /// Parse the current values into a record. Required text fields must
    /// be non-empty; empty numeric input coerces to 0.
    pub fn parse(&self) -> Result<NewRecord, String> {
        for field in self.entity_fields() {
            if let FieldKind::Text { required: true } = field.kind {
                if field.value.trim().is_empty() {
                    return Err(format!("{} is required", field.label));
                }
            }
        }

        let fields = self.entity_fields();
        let text = |i: usize| fields[i].value.trim().to_string();
        let number = |i: usize| fields[i].value.parse::<u32>().unwrap_or(0);

        Ok(match self.kind {
            EntityKind::Listing => {
                // Quick-add listings omit the status selector and are
                // created Available, like the original quick form
                let (status, rent_idx) = if self.quick {
                    (ListingStatus::Available, 2)
                } else {
                    let status = match fields[2].selected_option() {
                        "Occupied" => ListingStatus::Occupied,
                        _ => ListingStatus::Available,
                    };
                    (status, 3)
                };
                NewRecord::Listing {
                    name: text(0),
                    address: text(1),
                    status,
                    rent: number(rent_idx),
                }
            }
            EntityKind::Rent => NewRecord::Rent {
                property: text(0),
                tenant: text(1),
                amount: number(2),
                due: text(3),
            },
            EntityKind::Maintenance => {
                let priority = match fields[2].selected_option() {
                    "High" => Priority::High,
                    "Low" => Priority::Low,
                    _ => Priority::Medium,
                };
                NewRecord::Maintenance {
                    property: text(0),
                    issue: text(1),
                    priority,
                    eta: text(3),
                }
            }
        })
    }
}
