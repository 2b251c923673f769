//! Product Model
//!
//! Products are immutable reference data. Each product may offer modifiers,
//! which are tagged as either a boolean toggle or a quantity count. The
//! default value of a modifier always matches its tag.

use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base price in currency units
    pub price: Decimal,
    pub calories: u32,
    pub image: String,
    /// Category reference (String ID)
    pub category_id: String,
    #[serde(default)]
    pub popular: bool,
    /// Available modifiers, in display order
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl Product {
    /// Look up a modifier offered by this product
    pub fn modifier(&self, id: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.id == id)
    }
}

/// Modifier variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    /// On/off toggle (e.g. "Extra Cheese")
    Boolean,
    /// Countable add-on (e.g. "Extra Salsa x3")
    Quantity,
}

/// A modifier selection, or a modifier default
///
/// Serialized as a bare JSON boolean or number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    Toggle(bool),
    Count(u32),
}

impl ModifierValue {
    /// The modifier kind this value belongs to
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::Toggle(_) => ModifierKind::Boolean,
            Self::Count(_) => ModifierKind::Quantity,
        }
    }

    /// How many times the modifier's price delta applies
    pub fn multiplier(&self) -> u32 {
        match self {
            Self::Toggle(true) => 1,
            Self::Toggle(false) => 0,
            Self::Count(n) => *n,
        }
    }

    pub fn is_active(&self) -> bool {
        self.multiplier() > 0
    }
}

/// Product customization with its own price delta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModifierRecord", into = "ModifierRecord")]
pub struct Modifier {
    pub id: String,
    pub name: String,
    /// Price delta per activation
    pub price: Decimal,
    default: ModifierValue,
}

impl Modifier {
    /// Create a boolean-toggle modifier
    pub fn toggle(id: impl Into<String>, name: impl Into<String>, price: Decimal, default: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            default: ModifierValue::Toggle(default),
        }
    }

    /// Create a quantity-count modifier
    pub fn count(id: impl Into<String>, name: impl Into<String>, price: Decimal, default: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            default: ModifierValue::Count(default),
        }
    }

    /// Create a modifier from an explicit tag, rejecting a default of the wrong shape
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        kind: ModifierKind,
        default: ModifierValue,
    ) -> AppResult<Self> {
        let id = id.into();
        if default.kind() != kind {
            return Err(AppError::with_message(
                ErrorCode::ModifierKindMismatch,
                format!("modifier {id} is {kind:?} but its default is {:?}", default.kind()),
            )
            .with_detail("modifier", id));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            default,
        })
    }

    pub fn kind(&self) -> ModifierKind {
        self.default.kind()
    }

    pub fn default_value(&self) -> ModifierValue {
        self.default
    }
}

/// Wire shape: `{ id, name, price, type, default }`
#[derive(Serialize, Deserialize)]
struct ModifierRecord {
    id: String,
    name: String,
    price: Decimal,
    #[serde(rename = "type")]
    kind: ModifierKind,
    default: ModifierValue,
}

impl TryFrom<ModifierRecord> for Modifier {
    type Error = AppError;

    fn try_from(r: ModifierRecord) -> Result<Self, Self::Error> {
        Modifier::try_new(r.id, r.name, r.price, r.kind, r.default)
    }
}

impl From<Modifier> for ModifierRecord {
    fn from(m: Modifier) -> Self {
        Self {
            kind: m.kind(),
            id: m.id,
            name: m.name,
            price: m.price,
            default: m.default,
        }
    }
}
