// ntag21x/src/transceiver/mock.rs

use crate::transceiver::traits::{Property, TargetInfo, Transceiver};
use crate::types::Uid;
use crate::{Error, Result};

/// Scripted transceiver for unit tests. It records every frame and property
/// change and answers with queued responses.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Result<Vec<u8>>>,
    pub targets: Vec<TargetInfo>,
    pub properties: Vec<(Property, bool)>,
    /// Properties the reader refuses
    pub rejected_properties: Vec<Property>,
    pub polls: usize,
    /// Timeout handed to each poll, in order
    pub poll_timeouts: Vec<u64>,
    pub opens: usize,
    pub closes: usize,
}

impl MockTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock with one NTAG target waiting to be polled.
    pub fn with_target(uid: Uid) -> Self {
        let mut m = Self::new();
        m.push_target(TargetInfo::ntag(uid));
        m
    }

    pub fn push_target(&mut self, target: TargetInfo) {
        self.targets.push(target);
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    pub fn push_error(&mut self, err: Error) {
        self.responses.push(Err(err));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Last value set for `property`, if any.
    pub fn property(&self, property: Property) -> Option<bool> {
        self.properties
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }
}

impl Transceiver for MockTransceiver {
    fn open(&mut self) -> Result<()> {
        self.opens += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        Ok(())
    }

    fn poll(&mut self, timeout_ms: u64) -> Result<Option<TargetInfo>> {
        self.polls += 1;
        self.poll_timeouts.push(timeout_ms);
        if self.targets.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.targets.remove(0)))
        }
    }

    fn transceive(
        &mut self,
        request: &[u8],
        max_response_len: usize,
        _timeout_ms: u64,
    ) -> Result<Vec<u8>> {
        self.sent.push(request.to_vec());
        if self.responses.is_empty() {
            return Err(Error::Timeout);
        }
        self.responses.remove(0).map(|mut r| {
            r.truncate(max_response_len);
            r
        })
    }

    fn set_property(&mut self, property: Property, enabled: bool) -> Result<()> {
        if self.rejected_properties.contains(&property) {
            return Err(Error::Transport(format!("{property} not supported")));
        }
        self.properties.push((property, enabled));
        Ok(())
    }
}
