use tokio::spawn;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::models::{HighestTransfer, Transfer};

/// Single writer of the batch's highest transfer.
///
/// Workers nominate candidates through an unbounded channel and never wait on the resolver. The resolver
/// re-validates each candidate against the committed maximum and publishes every change on a watch channel,
/// which is what workers read their snapshot from.
pub struct MaximumResolver {
    candidates: mpsc::UnboundedSender<HighestTransfer>,
    highest: watch::Receiver<Option<HighestTransfer>>,
    task: JoinHandle<Option<HighestTransfer>>
}

impl MaximumResolver {
    /// Spawns the resolver task on the current runtime.
    pub fn spawn() -> Self {
        let (candidates, receiver) = mpsc::unbounded_channel();
        let (publisher, highest) = watch::channel(None);

        Self {
            candidates,
            highest,
            task: spawn(resolve(receiver, publisher))
        }
    }

    pub fn nominator(&self) -> Nominator {
        Nominator {
            candidates: self.candidates.clone(),
            highest: self.highest.clone()
        }
    }

    /// Signals that no more candidates will be produced by this handle and waits for the resolver to drain.
    ///
    /// The resolver exits only once every `Nominator` is dropped and the queue is empty, so a candidate sent by a
    /// worker racing this call is still committed.
    pub async fn finish(self) -> Result<Option<HighestTransfer>, JoinError> {
        drop(self.candidates);
        self.task.await
    }
}

/// A worker's handle to the resolver.
#[derive(Clone)]
pub struct Nominator {
    candidates: mpsc::UnboundedSender<HighestTransfer>,
    highest: watch::Receiver<Option<HighestTransfer>>
}

impl Nominator {
    /// Enqueues `transfer` when it beats the latest committed maximum. The check is optimistic: the snapshot
    /// may be stale, the resolver has the final word. Returns whether a candidate was enqueued.
    pub fn nominate(&self, transfer: &Transfer) -> bool {
        let beats = HighestTransfer::beats(transfer.amount, self.highest.borrow().as_ref());

        beats && self.candidates.send(HighestTransfer::from(transfer)).is_ok()
    }

    /// Snapshot of the committed maximum.
    #[cfg(test)]
    pub fn current(&self) -> Option<HighestTransfer> {
        self.highest.borrow().clone()
    }
}

async fn resolve(
    mut receiver: mpsc::UnboundedReceiver<HighestTransfer>,
    publisher: watch::Sender<Option<HighestTransfer>>
) -> Option<HighestTransfer> {
    let mut highest: Option<HighestTransfer> = None;

    //NOTE: recv() yields None only after every sender is dropped *and* the buffer is empty, which is the drain guarantee
    while let Some(candidate) = receiver.recv().await {
        if !HighestTransfer::beats(candidate.amount, highest.as_ref()) {
            continue;
        }

        debug!("Highest transfer is now [{}] for account [{}]", candidate.amount, candidate.account_id);

        publisher.send_replace(Some(candidate.clone()));
        highest = Some(candidate);
    }

    highest
}
