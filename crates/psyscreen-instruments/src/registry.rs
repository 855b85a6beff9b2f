use std::sync::LazyLock;

use psyscreen_core::models::instrument::InstrumentId;

use crate::{Instrument, all_instruments};

/// The set of instruments a deployment can classify.
///
/// Normalization only succeeds for instruments present here, so a
/// deployment that omits an instrument gets `UnknownInstrument` for it
/// instead of a silent default.
pub struct Registry {
    instruments: Vec<Box<dyn Instrument>>,
}

static STANDARD: LazyLock<Registry> = LazyLock::new(Registry::standard);

impl Registry {
    /// Every supported instrument.
    pub fn standard() -> Self {
        Self::from_instruments(all_instruments())
    }

    /// Shared instance of [`Registry::standard`].
    pub fn global() -> &'static Registry {
        &STANDARD
    }

    /// Later entries for an already registered id are ignored.
    pub fn from_instruments(instruments: Vec<Box<dyn Instrument>>) -> Self {
        let mut registered: Vec<Box<dyn Instrument>> = Vec::with_capacity(instruments.len());
        for instrument in instruments {
            if registered.iter().any(|i| i.id() == instrument.id()) {
                tracing::warn!(instrument = %instrument.id(), "duplicate instrument registration ignored");
                continue;
            }
            registered.push(instrument);
        }
        Self {
            instruments: registered,
        }
    }

    pub fn get(&self, id: InstrumentId) -> Option<&dyn Instrument> {
        self.instruments
            .iter()
            .find(|i| i.id() == id)
            .map(|i| i.as_ref())
    }

    pub fn contains(&self, id: InstrumentId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Instrument> {
        self.instruments.iter().map(|i| i.as_ref())
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
