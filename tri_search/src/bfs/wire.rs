/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The inter-node wire format (§6): "Null-terminated signature strings on
//! tag 0; single-int idle/non-idle flags on tag 1."
//!
//! The in-process [`super::transport::ChannelTransport`] multiplexes every
//! peer's traffic onto one inbox per destination node, so each frame is
//! prefixed with the sending node's rank as a single byte ahead of the tag
//! — a real MPI transport would instead recover the sender from the
//! `MPI_Recv` envelope and would not need this extra byte; it is the one
//! departure from §6's literal two-field format, needed only because this
//! transport has no envelope of its own (see `DESIGN.md`).

use crate::errors::SearchError;

const TAG_SIGNATURE: u8 = 0;
const TAG_IDLE: u8 = 1;

/// Encodes a signature-delivery frame: `[from, TAG_SIGNATURE, sig bytes, 0]`.
pub fn encode_signature(from: usize, sig: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(sig.len() + 3);
    out.push(from as u8);
    out.push(TAG_SIGNATURE);
    out.extend_from_slice(sig.as_bytes());
    out.push(0);
    out
}

/// Encodes an idle/non-idle status frame: `[from, TAG_IDLE, flag]`.
pub fn encode_idle(from: usize, idle: bool) -> Vec<u8> {
    vec![from as u8, TAG_IDLE, idle as u8]
}

/// One decoded frame, with the sender rank recovered from the envelope byte.
pub enum Frame {
    Signature { from: usize, sig: String },
    Idle { from: usize, idle: bool },
}

/// Decodes a frame produced by [`encode_signature`] or [`encode_idle`].
pub fn decode(bytes: &[u8]) -> Result<Frame, SearchError> {
    if bytes.len() < 2 {
        return Err(SearchError::Transport("frame shorter than envelope+tag".into()));
    }
    let from = bytes[0] as usize;
    match bytes[1] {
        TAG_SIGNATURE => {
            let body = &bytes[2..];
            let end = body
                .iter()
                .position(|&b| b == 0)
                .ok_or_else(|| SearchError::Transport("signature frame missing null terminator".into()))?;
            let sig = String::from_utf8(body[..end].to_vec())
                .map_err(|e| SearchError::Transport(format!("signature frame is not UTF-8: {e}")))?;
            Ok(Frame::Signature { from, sig })
        }
        TAG_IDLE => {
            let flag = *bytes
                .get(2)
                .ok_or_else(|| SearchError::Transport("idle frame missing flag byte".into()))?;
            Ok(Frame::Idle { from, idle: flag != 0 })
        }
        other => Err(SearchError::Transport(format!("unknown wire tag {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_frame_round_trips() {
        let frame = encode_signature(2, "abcDEF");
        match decode(&frame).unwrap() {
            Frame::Signature { from, sig } => {
                assert_eq!(from, 2);
                assert_eq!(sig, "abcDEF");
            }
            Frame::Idle { .. } => panic!("expected a signature frame"),
        }
    }

    #[test]
    fn idle_frame_round_trips() {
        let frame = encode_idle(1, true);
        match decode(&frame).unwrap() {
            Frame::Idle { from, idle } => {
                assert_eq!(from, 1);
                assert!(idle);
            }
            Frame::Signature { .. } => panic!("expected an idle frame"),
        }
    }

    #[test]
    fn truncated_frame_is_a_transport_error() {
        assert!(decode(&[0]).is_err());
    }
}
