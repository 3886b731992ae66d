//! Packet traversal around the token ring.
//!
//! Both requests run synchronously: they walk a packet hop by hop, write a
//! human-readable trace to the caller's sink, and return once the packet has
//! reached its destination or travelled the whole ring. Write failures on the
//! sink never abort a request or change its result.

use crate::node::{Node, NodeId};
use crate::packet::Packet;
use crate::Network;
use std::io::{self, Write};

/// Where a unicast packet stopped travelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Route {
    /// Reached the node named by the packet's destination.
    Arrived(NodeId),
    /// Came back to its origin without meeting the destination.
    Returned,
}

impl Network {
    /// Send a broadcast packet from the first node around the whole ring.
    ///
    /// Every node accepts the packet and passes it on exactly once. Always
    /// returns `true`.
    ///
    /// # Panics
    /// If the network is not consistent.
    #[tracing::instrument(skip_all)]
    pub fn request_broadcast<W: Write + ?Sized>(&self, sink: &mut W) -> bool {
        let first = self.assert_consistent("broadcast");
        ignore_sink_error(sink.write_all(b"Broadcast Request\n"));

        let packet = match self.node(first) {
            Some(node) => Packet::broadcast(&node.name),
            None => unreachable!("first node {first} is on the ring"),
        };

        let mut hops = 0u64;
        for (_, node) in self.walk(first) {
            tracing::trace!(node = %node.name, "broadcast hop");
            ignore_sink_error(node.accept_broadcast(sink));
            ignore_sink_error(node.log_pass_through(sink));
            hops += 1;
        }

        ignore_sink_error(sink.write_all(b">>> Broadcast travelled whole token ring.\n\n"));

        metrics::counter!("lan_broadcast_requests_total").increment(1);
        metrics::counter!("lan_packet_hops_total").increment(hops);
        tracing::info!(origin = %packet.origin, hops, "broadcast travelled whole ring");
        true
    }

    /// Ask `workstation` to print `document` on `printer`.
    ///
    /// The packet travels from the workstation until it meets a node called
    /// `printer` or comes back to the workstation. Returns `true` only when
    /// the destination was reached and is a printer.
    ///
    /// # Panics
    /// If the network is not consistent or `workstation` is not registered.
    #[tracing::instrument(skip(self, document, sink))]
    pub fn request_print<W: Write + ?Sized>(
        &self,
        workstation: &str,
        document: &str,
        printer: &str,
        sink: &mut W,
    ) -> bool {
        self.assert_consistent("print");
        let Some(origin) = self.workstation(workstation) else {
            panic!("print request from unknown workstation '{workstation}'");
        };

        ignore_sink_error(writeln!(
            sink,
            "'{workstation}' requests printing of '{document}' on '{printer}' ..."
        ));

        let packet = Packet::new(document, workstation, printer);
        let (route, hops) = self.send(origin, &packet, sink);
        metrics::counter!("lan_packet_hops_total").increment(hops);

        let outcome = match route {
            Route::Arrived(at) => match self.node(at) {
                Some(node) if packet.print(node, sink) => "delivered",
                _ => "rejected",
            },
            Route::Returned => {
                ignore_sink_error(
                    sink.write_all(b">>> Destinition not found, print job cancelled.\n\n")
                        .and_then(|()| sink.flush()),
                );
                "not_found"
            }
        };

        metrics::counter!("lan_print_requests_total", "outcome" => outcome).increment(1);
        tracing::info!(hops, outcome, "print request finished");
        outcome == "delivered"
    }

    /// Forward `packet` from `start` until it arrives or returns to its
    /// origin, logging every node it passes. Never goes round the ring twice.
    fn send<W: Write + ?Sized>(
        &self,
        start: NodeId,
        packet: &Packet,
        sink: &mut W,
    ) -> (Route, u64) {
        let mut current = start;
        let mut hops = 0u64;

        for _ in 0..self.len() {
            let Some(node) = self.node(current) else {
                break;
            };
            tracing::trace!(node = %node.name, "forwarding packet");
            ignore_sink_error(node.log_pass_through(sink));
            hops += 1;

            let Some(next) = self.successor(current) else {
                break;
            };
            current = next;

            if let Some(route) = self.node(current).and_then(|node| arrival(node, current, packet)) {
                return (route, hops);
            }
        }

        // A dangling link ends the journey like a full circuit.
        (Route::Returned, hops)
    }

    /// Check the request precondition and return the first node.
    fn assert_consistent(&self, request: &str) -> NodeId {
        match (self.check_consistency(), self.first_node()) {
            (Ok(()), Some(first)) => first,
            (Err(reason), _) => panic!("{request} requires a consistent network: {reason}"),
            (Ok(()), None) => unreachable!("consistent network has a first node"),
        }
    }
}

/// Termination check for the node a packet just moved to. Returning to the
/// origin wins over matching the destination, so a packet addressed to its
/// own origin is never delivered.
fn arrival(node: &Node, id: NodeId, packet: &Packet) -> Option<Route> {
    if node.matches_name(&packet.origin) {
        Some(Route::Returned)
    } else if node.matches_name(&packet.destination) {
        Some(Route::Arrived(id))
    } else {
        None
    }
}

fn ignore_sink_error(result: io::Result<()>) {
    if let Err(err) = result {
        tracing::debug!(%err, "ignoring trace sink failure");
    }
}
