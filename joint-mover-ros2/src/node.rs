use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use joint_mover::Error;
use parking_lot::{Mutex, MutexGuard};
use tracing::trace;

/// Cloneable handle to the ROS2 node the action client lives on.
#[derive(Clone)]
pub struct Node {
    shared: Arc<Shared>,
}

struct Shared {
    node: Mutex<r2r::Node>,
    spinning: AtomicBool,
}

impl Node {
    /// Creates a node in a fresh `r2r::Context`.
    pub fn new(name: &str, namespace: &str) -> Result<Self, Error> {
        let ctx = r2r::Context::create().map_err(|e| Error::Connection {
            message: format!("failed to initialize ROS2 context: {e}"),
        })?;
        Self::with_context(ctx, name, namespace)
    }

    /// Creates a node in an existing `r2r::Context`.
    pub fn with_context(ctx: r2r::Context, name: &str, namespace: &str) -> Result<Self, Error> {
        let node = r2r::Node::create(ctx, name, namespace).map_err(|e| Error::Connection {
            message: format!("failed to create node {namespace}/{name}: {e}"),
        })?;
        Ok(Self {
            shared: Arc::new(Shared {
                node: Mutex::new(node),
                spinning: AtomicBool::new(false),
            }),
        })
    }

    /// Locks and returns the underlying `r2r::Node`.
    ///
    /// Do not hold the guard across an `.await`.
    pub fn r2r(&self) -> MutexGuard<'_, r2r::Node> {
        self.shared.node.lock()
    }

    /// Returns the node name including its namespace.
    pub fn fully_qualified_name(&self) -> Result<String, Error> {
        self.r2r()
            .fully_qualified_name()
            .map_err(|e| anyhow::Error::from(e).into())
    }

    /// Starts a tokio task that keeps the node spinning every `interval`.
    ///
    /// Server discovery, goal responses, feedback and results are all
    /// delivered from this task, so it has to run before the first
    /// `wait_for_server`. Only the first call starts a task. The task ends
    /// when it holds the last handle to the node.
    pub fn spawn_spin_task(&self, interval: Duration) {
        if self.shared.spinning.swap(true, Ordering::Relaxed) {
            return;
        }
        let node = self.clone();
        tokio::spawn(async move {
            while Arc::strong_count(&node.shared) > 1 {
                node.spin_once(interval).await;
            }
            trace!("node dropped, spin task finished");
        });
    }

    /// Processes pending callbacks without blocking, then sleeps for the rest
    /// of `period`.
    pub async fn spin_once(&self, period: Duration) {
        let started = Instant::now();
        // r2r's own timeout would block this worker with the lock held
        self.r2r().spin_once(Duration::ZERO);
        tokio::time::sleep(period.saturating_sub(started.elapsed())).await;
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("spinning", &self.shared.spinning.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
