//! Tile cascade integration tests
//!
//! Drives `TileCascade` against a scripted host that records every call and
//! mirrors the grid contents, on tokio's paused clock.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use folio_core::{
    CascadeOutcome, MediaLoadError, ProjectRecord, SessionRegistry, TileCascade, TileHost,
};
use proptest::prelude::*;
use tokio::sync::{watch, Notify};

// ============================================================================
// Scripted host
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    Placeholder(usize),
    Request(usize),
    Reveal(usize),
    Remove(usize),
    Pace,
}

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    slot: usize,
    title: String,
    loaded: bool,
}

/// Grid shared by every host, like the single DOM container on the page.
type Grid = Arc<Mutex<Vec<Cell>>>;

struct ScriptedHost {
    calls: Arc<Mutex<Vec<Call>>>,
    grid: Grid,
    failing: HashSet<String>,
    stalled: HashMap<String, Arc<Notify>>,
    load_time: Duration,
    in_view: Option<Arc<Notify>>,
    visible: watch::Receiver<bool>,
}

impl ScriptedHost {
    fn new(grid: Grid, visible: watch::Receiver<bool>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            grid,
            failing: HashSet::new(),
            stalled: HashMap::new(),
            load_time: Duration::from_millis(30),
            in_view: None,
            visible,
        }
    }

    fn failing(mut self, src: &str) -> Self {
        self.failing.insert(src.to_string());
        self
    }

    fn stalled(mut self, src: &str, release: Arc<Notify>) -> Self {
        self.stalled.insert(src.to_string(), release);
        self
    }

    fn log(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl TileHost for ScriptedHost {
    fn clear(&mut self) {
        self.log(Call::Clear);
        self.grid.lock().unwrap().clear();
    }

    fn insert_placeholder(&mut self, slot: usize, record: &ProjectRecord) {
        self.log(Call::Placeholder(slot));
        self.grid.lock().unwrap().push(Cell {
            slot,
            title: record.title.clone(),
            loaded: false,
        });
    }

    async fn load_cover(&mut self, slot: usize, src: &str) -> Result<(), MediaLoadError> {
        self.log(Call::Request(slot));
        if let Some(release) = self.stalled.get(src) {
            release.notified().await;
        }
        tokio::time::sleep(self.load_time).await;
        if self.failing.contains(src) {
            Err(MediaLoadError::new(src))
        } else {
            Ok(())
        }
    }

    fn reveal(&mut self, slot: usize) {
        self.log(Call::Reveal(slot));
        for cell in self.grid.lock().unwrap().iter_mut() {
            if cell.slot == slot {
                cell.loaded = true;
            }
        }
    }

    fn remove(&mut self, slot: usize) {
        self.log(Call::Remove(slot));
        self.grid.lock().unwrap().retain(|cell| cell.slot != slot);
    }

    async fn pace(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
        self.log(Call::Pace);
    }

    async fn wait_until_in_view(&mut self) {
        if let Some(gate) = &self.in_view {
            gate.notified().await;
        }
    }

    async fn document_visible(&mut self) -> bool {
        *self.visible.borrow()
    }

    async fn wait_until_visible(&mut self) {
        while !*self.visible.borrow_and_update() {
            if self.visible.changed().await.is_err() {
                break;
            }
        }
    }
}

fn project(title: &str) -> ProjectRecord {
    ProjectRecord {
        cover: Some(format!("{}.jpg", title)),
        ..ProjectRecord::titled(title)
    }
}

fn projects(titles: &[&str]) -> Vec<ProjectRecord> {
    titles.iter().map(|t| project(t)).collect()
}

fn titles(grid: &Grid) -> Vec<String> {
    grid.lock().unwrap().iter().map(|c| c.title.clone()).collect()
}

fn visible_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(true)
}

// ============================================================================
// Ordering
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_all_tiles_revealed_in_order() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let mut host = ScriptedHost::new(grid.clone(), rx);
    let calls = host.calls.clone();

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a", "b", "c"]);

    let outcome = TileCascade::default().run(&session, &records, &mut host).await;

    assert!(outcome.is_completed());
    assert_eq!(outcome.report().revealed, 3);
    assert_eq!(titles(&grid), vec!["a", "b", "c"]);
    assert!(grid.lock().unwrap().iter().all(|c| c.loaded));

    let mut expected = vec![Call::Clear];
    for slot in 0..3 {
        expected.extend([
            Call::Placeholder(slot),
            Call::Request(slot),
            Call::Reveal(slot),
            Call::Pace,
        ]);
    }
    assert_eq!(*calls.lock().unwrap(), expected);
}

#[tokio::test(start_paused = true)]
async fn test_pacing_separates_tiles() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let mut host = ScriptedHost::new(grid.clone(), rx);
    host.load_time = Duration::ZERO;

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a", "b", "c", "d"]);

    let start = tokio::time::Instant::now();
    TileCascade::new(Duration::from_millis(100))
        .run(&session, &records, &mut host)
        .await;

    assert_eq!(start.elapsed(), Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn test_failed_cover_is_removed_and_cascade_continues() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let mut host = ScriptedHost::new(grid.clone(), rx).failing("c.jpg");
    let calls = host.calls.clone();

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a", "b", "c", "d", "e"]);

    let outcome = TileCascade::default().run(&session, &records, &mut host).await;

    assert_eq!(outcome.report().revealed, 4);
    assert_eq!(outcome.report().failed, 1);
    assert_eq!(titles(&grid), vec!["a", "b", "d", "e"]);

    let calls = calls.lock().unwrap();
    let requests: Vec<usize> = calls
        .iter()
        .filter_map(|c| match c {
            Call::Request(slot) => Some(*slot),
            _ => None,
        })
        .collect();
    assert_eq!(requests, vec![0, 1, 2, 3, 4]);

    let removed = calls.iter().position(|c| *c == Call::Remove(2)).unwrap();
    let next = calls.iter().position(|c| *c == Call::Request(3)).unwrap();
    assert!(removed < next);
}

#[tokio::test(start_paused = true)]
async fn test_missing_cover_is_dropped_without_request() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let mut host = ScriptedHost::new(grid.clone(), rx);
    let calls = host.calls.clone();

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = vec![project("a"), ProjectRecord::titled("no-cover"), project("b")];

    let outcome = TileCascade::default().run(&session, &records, &mut host).await;

    assert_eq!(outcome.report().failed, 1);
    assert_eq!(titles(&grid), vec!["a", "b"]);
    assert!(!calls.lock().unwrap().contains(&Call::Request(1)));
}

#[tokio::test(start_paused = true)]
async fn test_empty_list_completes_with_empty_grid() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::new(Mutex::new(vec![Cell {
        slot: 0,
        title: "old".into(),
        loaded: true,
    }]));
    let mut host = ScriptedHost::new(grid.clone(), rx);

    let registry = SessionRegistry::new();
    let outcome = TileCascade::default()
        .run(&registry.begin(), &[], &mut host)
        .await;

    assert!(outcome.is_completed());
    assert!(titles(&grid).is_empty());
}

// ============================================================================
// Supersession
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_new_session_replaces_old_cascade() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let registry = SessionRegistry::new();

    let old_session = registry.begin();
    let mut old_host = ScriptedHost::new(grid.clone(), rx.clone());
    let old_calls = old_host.calls.clone();
    let old_records = projects(&["old-1", "old-2", "old-3", "old-4", "old-5"]);
    let old = tokio::spawn(async move {
        TileCascade::default()
            .run(&old_session, &old_records, &mut old_host)
            .await
    });

    // Let the first tile or two settle.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let seen_before = old_calls.lock().unwrap().len();

    let new_session = registry.begin();
    let mut new_host = ScriptedHost::new(grid.clone(), rx);
    let new_records = projects(&["new-1", "new-2"]);
    let outcome = TileCascade::default()
        .run(&new_session, &new_records, &mut new_host)
        .await;

    let old_outcome = old.await.unwrap();
    assert!(matches!(old_outcome, CascadeOutcome::Superseded(_)));
    assert!(outcome.is_completed());
    assert_eq!(titles(&grid), vec!["new-1", "new-2"]);

    // Nothing from the old cascade ran after it was superseded.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(old_calls.lock().unwrap().len(), seen_before);
    assert_eq!(titles(&grid), vec!["new-1", "new-2"]);
}

#[tokio::test(start_paused = true)]
async fn test_superseded_while_waiting_for_viewport() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let gate = Arc::new(Notify::new());
    let mut host = ScriptedHost::new(grid.clone(), rx);
    host.in_view = Some(gate.clone());
    let calls = host.calls.clone();

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a"]);
    let task = tokio::spawn(async move {
        TileCascade::default().run(&session, &records, &mut host).await
    });

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(*calls.lock().unwrap(), vec![Call::Clear]);

    registry.begin();
    assert!(matches!(task.await.unwrap(), CascadeOutcome::Superseded(_)));
    assert!(titles(&grid).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_viewport_gate_defers_loading() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let gate = Arc::new(Notify::new());
    let mut host = ScriptedHost::new(grid.clone(), rx);
    host.in_view = Some(gate.clone());

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a", "b"]);
    let task = tokio::spawn(async move {
        TileCascade::default().run(&session, &records, &mut host).await
    });

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(titles(&grid).is_empty());

    gate.notify_one();
    assert!(task.await.unwrap().is_completed());
    assert_eq!(titles(&grid), vec!["a", "b"]);
}

// ============================================================================
// Suspension
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_hidden_document_pauses_cascade() {
    let (tx, rx) = watch::channel(false);
    let grid: Grid = Arc::default();
    let mut host = ScriptedHost::new(grid.clone(), rx);
    let calls = host.calls.clone();

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a", "b", "c"]);
    let task = tokio::spawn(async move {
        TileCascade::default().run(&session, &records, &mut host).await
    });

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(titles(&grid), vec!["a"]);
    assert!(!calls.lock().unwrap().contains(&Call::Request(1)));

    tx.send(true).unwrap();
    let outcome = task.await.unwrap();
    assert_eq!(outcome.report().revealed, 3);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_cover_blocks_rest_of_cascade() {
    let (_tx, rx) = visible_channel();
    let grid: Grid = Arc::default();
    let release = Arc::new(Notify::new());
    let mut host = ScriptedHost::new(grid.clone(), rx).stalled("b.jpg", release.clone());

    let registry = SessionRegistry::new();
    let session = registry.begin();
    let records = projects(&["a", "b", "c"]);
    let task = tokio::spawn(async move {
        TileCascade::default().run(&session, &records, &mut host).await
    });

    tokio::time::sleep(Duration::from_secs(600)).await;
    {
        let grid = grid.lock().unwrap();
        assert_eq!(grid.len(), 2);
        assert!(grid[0].loaded);
        assert!(!grid[1].loaded);
    }

    release.notify_one();
    let outcome = task.await.unwrap();
    assert!(outcome.is_completed());
    assert_eq!(titles(&grid), vec!["a", "b", "c"]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Tiles left in the grid are exactly the records whose cover loaded,
    /// in their original order.
    #[test]
    fn grid_holds_exactly_the_successful_covers(failures in prop::collection::vec(any::<bool>(), 1..12)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();

        let (_tx, rx) = visible_channel();
        let grid: Grid = Arc::default();
        let mut host = ScriptedHost::new(grid.clone(), rx);
        let mut records = Vec::new();
        let mut expected = Vec::new();
        for (i, fails) in failures.iter().enumerate() {
            let title = format!("p{}", i);
            if *fails {
                host = host.failing(&format!("{}.jpg", title));
            } else {
                expected.push(title.clone());
            }
            records.push(project(&title));
        }

        let registry = SessionRegistry::new();
        let session = registry.begin();
        let outcome = runtime.block_on(TileCascade::default().run(&session, &records, &mut host));

        prop_assert_eq!(outcome.report().revealed, expected.len());
        prop_assert_eq!(outcome.report().processed, records.len());
        prop_assert_eq!(titles(&grid), expected);
    }
}
