use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

enum State<T, U> {
    Resolved(T),
    Blocked(U),
}

/// Outcome of a request to start or stop presenting. Device failures are
/// reported as a message, the same way services report them.
pub type VRPresentResult = Result<(), String>;

const DROPPED: &str = "Present request dropped by the display";

/// A present/exit request that settles exactly once. Either it was already
/// settled when the display returned it, or it is blocked until the display
/// resolves the matching `VRResolvePresent`.
pub struct VRFuturePresent(State<VRPresentResult, Receiver<VRPresentResult>>);

pub struct VRResolvePresent(State<(), Sender<VRPresentResult>>);

impl VRFuturePresent {
    pub fn resolved(result: VRPresentResult) -> VRFuturePresent {
        VRFuturePresent(State::Resolved(result))
    }

    pub fn blocked() -> (VRResolvePresent, VRFuturePresent) {
        let (send, recv) = channel();
        (
            VRResolvePresent(State::Blocked(send)),
            VRFuturePresent(State::Blocked(recv)),
        )
    }

    /// Returns the result if it is available without waiting.
    pub fn try_take(&mut self) -> Option<VRPresentResult> {
        let result = match self.0 {
            State::Resolved(ref result) => result.clone(),
            State::Blocked(ref recv) => match recv.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => Err(DROPPED.into()),
            },
        };
        self.0 = State::Resolved(result.clone());
        Some(result)
    }

    /// Waits for the display to settle the request.
    pub fn block(self) -> VRPresentResult {
        match self {
            VRFuturePresent(State::Resolved(result)) => result,
            VRFuturePresent(State::Blocked(recv)) => {
                recv.recv().unwrap_or_else(|_| Err(DROPPED.into()))
            }
        }
    }
}

impl VRResolvePresent {
    pub fn resolve(&mut self, result: VRPresentResult) -> Result<(), ()> {
        match self.0 {
            State::Resolved(()) => return Err(()),
            // The receiving side may already be gone; the request still counts as settled.
            State::Blocked(ref send) => { let _ = send.send(result); }
        };
        self.0 = State::Resolved(());
        Ok(())
    }
}
