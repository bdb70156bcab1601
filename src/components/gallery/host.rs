//! Signal-backed tile host.
//!
//! The cascade drives the grid through this host: tiles live in a
//! `Signal<Vec<GridTile>>` that the grid renders, and cover load/error
//! events come back from the rendered `<img>` elements over a channel.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{MediaLoadError, ProjectRecord, TileHost, TilePhase};
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

use crate::dom;

/// A tile as the grid renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTile {
    pub slot: usize,
    /// Session that inserted the tile
    pub generation: u64,
    pub record: ProjectRecord,
    pub phase: TilePhase,
}

/// Outcome of a cover `<img>`.
#[derive(Debug, Clone, Copy)]
pub struct CoverEvent {
    pub generation: u64,
    pub slot: usize,
    pub loaded: bool,
}

pub struct SignalHost {
    tiles: Signal<Vec<GridTile>>,
    covers: UnboundedReceiver<CoverEvent>,
    generation: u64,
    grid_id: &'static str,
}

impl SignalHost {
    pub fn new(
        tiles: Signal<Vec<GridTile>>,
        covers: UnboundedReceiver<CoverEvent>,
        generation: u64,
        grid_id: &'static str,
    ) -> Self {
        Self {
            tiles,
            covers,
            generation,
            grid_id,
        }
    }

    fn set_phase(&mut self, slot: usize, phase: TilePhase) {
        if let Some(tile) = self.tiles.write().iter_mut().find(|t| t.slot == slot) {
            tile.phase = phase;
        }
    }
}

impl TileHost for SignalHost {
    fn clear(&mut self) {
        self.tiles.write().clear();
    }

    fn insert_placeholder(&mut self, slot: usize, record: &ProjectRecord) {
        self.tiles.write().push(GridTile {
            slot,
            generation: self.generation,
            record: record.clone(),
            phase: TilePhase::Placeholder,
        });
    }

    async fn load_cover(&mut self, slot: usize, src: &str) -> Result<(), MediaLoadError> {
        // Rendering the tile in the loading phase mounts its <img>.
        self.set_phase(slot, TilePhase::Loading);

        while let Some(event) = self.covers.next().await {
            if event.generation != self.generation || event.slot != slot {
                continue;
            }
            return if event.loaded {
                Ok(())
            } else {
                Err(MediaLoadError::new(src))
            };
        }
        // Grid unmounted: nobody will report this cover anymore.
        Err(MediaLoadError::new(src))
    }

    fn reveal(&mut self, slot: usize) {
        self.set_phase(slot, TilePhase::Loaded);
    }

    fn remove(&mut self, slot: usize) {
        self.tiles.write().retain(|t| t.slot != slot);
    }

    async fn pace(&mut self, delay: Duration) {
        gloo::timers::future::sleep(delay).await;
    }

    async fn wait_until_in_view(&mut self) {
        dom::wait_until_in_view(self.grid_id).await;
    }

    async fn document_visible(&mut self) -> bool {
        dom::document_visible()
    }

    async fn wait_until_visible(&mut self) {
        dom::wait_until_visible().await;
    }
}
