//=========================================================================
// Hotkey Bindings
//=========================================================================
//
// Static binding table: which hotkey drives which inventory slot.
//
// Architecture:
//   HotkeyConfigBuilder ──build()──> HotkeyConfig (Arc-shared, read-only)
//                                        └─ [HotkeyBinding; N]
//
// Bindings are declared once at startup and never change afterwards.
// Declaration order matters: it breaks ties between keys pressed on the
// same tick (last declared wins).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::info;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::{InputSymbol, ParseSymbolError};

//=== Defaults ============================================================

/// Slots bound by the stock configuration.
pub const DEFAULT_SLOTS: [usize; 6] = [4, 5, 6, 7, 8, 9];

/// Default input symbols, index-aligned with [`DEFAULT_SLOTS`].
pub const DEFAULT_SYMBOLS: [&str; 6] = ["F", "V", "C", "X", "Z", "Q"];

/// Default bound of the pending-activation queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

//=== ConfigError =========================================================

/// Errors raised while building a [`HotkeyConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A binding's input symbol could not be parsed.
    #[error("binding for slot {slot}: {source}")]
    InvalidSymbol {
        slot: usize,
        #[source]
        source: ParseSymbolError,
    },

    /// Two bindings share the same input symbol.
    #[error("input symbol {symbol} is bound to both slot {first} and slot {second}")]
    DuplicateSymbol {
        symbol: InputSymbol,
        first: usize,
        second: usize,
    },

    /// The pending-activation queue must hold at least one entry.
    #[error("queue capacity must be positive")]
    ZeroQueueCapacity,
}

//=== HotkeyBinding =======================================================

/// One registered hotkey. Identity is its `index` in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyBinding {
    index: usize,
    bound_slot: usize,
    default_symbol: InputSymbol,
    label: String,
}

impl HotkeyBinding {
    /// Position of this binding in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Inventory slot this hotkey activates.
    pub fn bound_slot(&self) -> usize {
        self.bound_slot
    }

    /// Input symbol the hotkey is registered with by default.
    pub fn default_symbol(&self) -> InputSymbol {
        self.default_symbol
    }

    /// Host-visible hotkey name, e.g. `"Quick Use Slot 5"`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

//=== HotkeyConfig ========================================================

/// Immutable, ordered binding table plus arbitration tuning.
///
/// Shared between per-player contexts through an `Arc`.
///
/// # Examples
///
/// ```
/// use hotkey_arbiter::core::hotkeys::HotkeyConfig;
///
/// let config = HotkeyConfig::builder()
///     .bind(4, "F")
///     .bind(5, "Mouse4")
///     .queue_capacity(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.len(), 2);
/// assert_eq!(config.bindings()[1].label(), "Quick Use Slot 6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyConfig {
    bindings: Vec<HotkeyBinding>,
    queue_capacity: usize,
}

impl HotkeyConfig {
    /// Starts an empty builder.
    pub fn builder() -> HotkeyConfigBuilder {
        HotkeyConfigBuilder::new()
    }

    /// Bindings in declaration order.
    pub fn bindings(&self) -> &[HotkeyBinding] {
        &self.bindings
    }

    /// Binding at `index`, if any.
    pub fn binding(&self, index: usize) -> Option<&HotkeyBinding> {
        self.bindings.get(index)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// An empty table makes arbitration inert.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
}

impl Default for HotkeyConfig {
    /// Stock table: slots 5-10 (zero-based 4-9) on `F V C X Z Q`.
    fn default() -> Self {
        let bindings = DEFAULT_SLOTS
            .iter()
            .zip(DEFAULT_SYMBOLS)
            .enumerate()
            .map(|(index, (&slot, symbol))| HotkeyBinding {
                index,
                bound_slot: slot,
                default_symbol: symbol
                    .parse()
                    .unwrap_or(InputSymbol::Key(crate::core::input::KeyCode::Unidentified)),
                label: slot_label(slot),
            })
            .collect();

        Self {
            bindings,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

fn slot_label(slot: usize) -> String {
    format!("Quick Use Slot {}", slot + 1)
}

//=== HotkeyConfigBuilder =================================================

/// Builder for [`HotkeyConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct HotkeyConfigBuilder {
    pending: Vec<(usize, String)>,
    queue_capacity: usize,
}

impl HotkeyConfigBuilder {
    fn new() -> Self {
        Self {
            pending: Vec::new(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Declares the next hotkey: `slot` activated by `symbol`.
    pub fn bind(mut self, slot: usize, symbol: impl Into<String>) -> Self {
        self.pending.push((slot, symbol.into()));
        self
    }

    /// Bounds the number of pending activations kept per player.
    ///
    /// Default: 16
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Validates the declarations and produces the table.
    pub fn build(self) -> Result<HotkeyConfig, ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }

        let mut seen: HashSet<InputSymbol> = HashSet::with_capacity(self.pending.len());
        let mut bindings: Vec<HotkeyBinding> = Vec::with_capacity(self.pending.len());

        for (index, (slot, text)) in self.pending.into_iter().enumerate() {
            let symbol: InputSymbol = text
                .parse()
                .map_err(|source| ConfigError::InvalidSymbol { slot, source })?;

            if !seen.insert(symbol) {
                let first = bindings
                    .iter()
                    .find(|b| b.default_symbol == symbol)
                    .map_or(slot, |b| b.bound_slot);
                return Err(ConfigError::DuplicateSymbol {
                    symbol,
                    first,
                    second: slot,
                });
            }

            bindings.push(HotkeyBinding {
                index,
                bound_slot: slot,
                default_symbol: symbol,
                label: slot_label(slot),
            });
        }

        info!(
            "Hotkey table built ({} bindings, queue capacity {})",
            bindings.len(),
            self.queue_capacity
        );

        Ok(HotkeyConfig {
            bindings,
            queue_capacity: self.queue_capacity,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
