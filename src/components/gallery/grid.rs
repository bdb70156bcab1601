//! Gallery grid: one cascade session per record list.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{CascadeOutcome, ProjectRecord, SessionRegistry, TileCascade};
use futures::channel::mpsc::{self, UnboundedSender};

use super::host::{CoverEvent, GridTile, SignalHost};
use super::tile::ProjectTile;

pub const GRID_ID: &str = "gallery-grid";

/// Bento grid revealed one tile at a time.
///
/// Every new `records` value starts a fresh session, which supersedes the
/// cascade still running for the previous value.
#[component]
pub fn GalleryGrid(records: ReadOnlySignal<Vec<ProjectRecord>>, pacing: Duration) -> Element {
    let tiles = use_signal(Vec::<GridTile>::new);
    let mut covers = use_signal(|| None::<UnboundedSender<CoverEvent>>);
    let registry = use_hook(SessionRegistry::new);

    {
        let registry = registry.clone();
        use_effect(move || {
            let records = records();
            let session = registry.begin();
            let (tx, rx) = mpsc::unbounded();
            covers.set(Some(tx));

            let mut host = SignalHost::new(tiles, rx, session.generation(), GRID_ID);
            let cascade = TileCascade::new(pacing);

            spawn(async move {
                match cascade.run(&session, &records, &mut host).await {
                    CascadeOutcome::Completed(report) => {
                        tracing::debug!(?report, "Grid complete");
                    }
                    CascadeOutcome::Superseded(report) => {
                        tracing::debug!(?report, "Grid superseded");
                    }
                }
            });
        });
    }

    use_drop(move || registry.cancel_current());

    rsx! {
        div {
            id: GRID_ID,
            class: "gallery-grid",
            "aria-live": "polite",
            for tile in tiles() {
                {
                    let (generation, slot) = (tile.generation, tile.slot);
                    rsx! {
                        ProjectTile {
                            key: "{generation}-{slot}",
                            tile,
                            on_cover: move |loaded: bool| {
                                if let Some(tx) = covers.peek().as_ref() {
                                    let _ = tx.unbounded_send(CoverEvent { generation, slot, loaded });
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
