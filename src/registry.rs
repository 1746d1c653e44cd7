use parking_lot::Mutex;

use crate::routing::{RouteError, RouteHandler, RouteTable};
use crate::stats::{StatRecord, StatsLog};

/// Owns the route table and the stats log behind one lock.
///
/// Every operation holds the lock only for a single map operation.
/// Handlers returned by `lookup` run after the guard is dropped.
pub struct Registry {
    inner: Mutex<Inner>,
}

struct Inner {
    routes: RouteTable,
    stats: StatsLog,
}

impl Registry {
    /// `reserved` lists the statically served paths that dynamic routes
    /// may not shadow.
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Mutex::new(Inner {
                routes: RouteTable::new(reserved),
                stats: StatsLog::new(),
            }),
        }
    }

    pub fn add_route(&self, path: &str, handler: RouteHandler) -> Result<(), RouteError> {
        self.inner.lock().routes.add(path, handler)
    }

    pub fn remove_route(&self, path: &str) -> Result<(), RouteError> {
        self.inner.lock().routes.remove(path)
    }

    pub fn lookup(&self, path: &str) -> Option<(RouteHandler, String)> {
        self.inner.lock().routes.lookup(path)
    }

    /// Number of dynamic routes currently registered.
    pub fn route_count(&self) -> usize {
        self.inner.lock().routes.len()
    }

    /// Stats accumulate even after the route is removed.
    pub fn record(&self, path: &str, record: StatRecord) {
        self.inner.lock().stats.record(path, record);
    }

    /// Atomic read-and-clear of the records for `path`.
    pub fn drain(&self, path: &str) -> Option<Vec<StatRecord>> {
        self.inner.lock().stats.drain(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::tracking_handler;
    use crate::stats::InboundRequest;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn inbound(i: usize) -> InboundRequest {
        InboundRequest {
            uri: format!("/x?i={i}"),
            method: "GET".into(),
            body: String::new(),
        }
    }

    #[test]
    fn handler_records_under_its_pattern() {
        let registry = Registry::new(["/addRoute"]);
        registry.add_route("/x", tracking_handler("/x")).unwrap();

        let (handler, pattern) = registry.lookup("/x").unwrap();
        assert_eq!(pattern, "/x");
        assert_eq!(handler(&registry, inbound(0)), "Hello, You visited: /x\n");

        let drained = registry.drain("/x").unwrap();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].uri, "/x?i=0");
    }

    #[test]
    fn stats_survive_route_removal() {
        let registry = Registry::new(Vec::<String>::new());
        registry.add_route("/x", tracking_handler("/x")).unwrap();
        let (handler, _) = registry.lookup("/x").unwrap();
        registry.remove_route("/x").unwrap();

        // In-flight handler finishing after removal still lands its record.
        handler(&registry, inbound(1));
        assert_eq!(registry.drain("/x").map(|r| r.len()), Some(1));
        assert_eq!(registry.route_count(), 0);
    }

    #[test]
    fn concurrent_records_are_all_counted() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let registry = Arc::new(Registry::new(Vec::<String>::new()));
        registry.add_route("/x", tracking_handler("/x")).unwrap();

        let workers: Vec<_> = (0..THREADS)
            .map(|t| {
                let registry = registry.clone();
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        let (handler, _) = registry.lookup("/x").unwrap();
                        handler(&*registry, inbound(t * PER_THREAD + i));
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        assert_eq!(registry.drain("/x").unwrap().len(), THREADS * PER_THREAD);
        assert_eq!(registry.drain("/x").unwrap().len(), 0);
    }

    #[test]
    fn interleaved_drains_never_lose_or_duplicate() {
        const WRITERS: usize = 4;
        const PER_WRITER: usize = 500;

        let registry = Arc::new(Registry::new(Vec::<String>::new()));
        let done = Arc::new(AtomicBool::new(false));

        let drainer = {
            let registry = registry.clone();
            let done = done.clone();
            thread::spawn(move || {
                let mut seen = Vec::new();
                while !done.load(Ordering::SeqCst) {
                    if let Some(batch) = registry.drain("/x") {
                        seen.extend(batch);
                    }
                    thread::yield_now();
                }
                seen
            })
        };

        let writers: Vec<_> = (0..WRITERS)
            .map(|w| {
                let registry = registry.clone();
                thread::spawn(move || {
                    for i in 0..PER_WRITER {
                        registry.record("/x", StatRecord::capture(inbound(w * PER_WRITER + i)));
                    }
                })
            })
            .collect();
        for w in writers {
            w.join().unwrap();
        }
        done.store(true, Ordering::SeqCst);

        let mut seen = drainer.join().unwrap();
        seen.extend(registry.drain("/x").unwrap_or_default());

        let mut uris: Vec<String> = seen.into_iter().map(|r| r.uri).collect();
        uris.sort();
        let before = uris.len();
        uris.dedup();
        assert_eq!(before, uris.len(), "a record was reported twice");
        assert_eq!(uris.len(), WRITERS * PER_WRITER, "a record was lost");
    }
}
