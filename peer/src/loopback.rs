//! In-memory channel pair for tests and headless play

use crate::error::ChannelError;
use crate::network::Channel;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

type Queue = Rc<RefCell<VecDeque<String>>>;

/// One end of a loopback pair. Clones share the same end.
#[derive(Clone)]
pub struct LoopbackChannel {
    outbox: Queue,
    inbox: Queue,
    open: Rc<Cell<bool>>,
}

/// Two connected endpoints: what `a` sends, `b` receives, and back
pub fn pair() -> (LoopbackChannel, LoopbackChannel) {
    let a_to_b: Queue = Rc::default();
    let b_to_a: Queue = Rc::default();
    let open = Rc::new(Cell::new(true));

    let a = LoopbackChannel {
        outbox: a_to_b.clone(),
        inbox: b_to_a.clone(),
        open: open.clone(),
    };
    let b = LoopbackChannel {
        outbox: b_to_a,
        inbox: a_to_b,
        open,
    };
    (a, b)
}

impl LoopbackChannel {
    /// Take every frame that has arrived at this end
    pub fn drain(&self) -> Vec<String> {
        self.inbox.borrow_mut().drain(..).collect()
    }

    /// Frames waiting at this end
    pub fn pending(&self) -> usize {
        self.inbox.borrow().len()
    }

    /// Lose every frame in flight toward this end
    pub fn drop_pending(&self) {
        self.inbox.borrow_mut().clear();
    }

    /// Close both ends
    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Channel for LoopbackChannel {
    fn is_open(&self) -> bool {
        self.open.get()
    }

    fn send_text(&self, text: &str) -> Result<(), ChannelError> {
        if !self.open.get() {
            return Err(ChannelError::Unavailable);
        }
        self.outbox.borrow_mut().push_back(text.to_string());
        Ok(())
    }
}
