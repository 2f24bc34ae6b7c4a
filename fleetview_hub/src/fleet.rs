//! Simulated fleet: a few backend services that only report I/O, plus room servers
//! that report I/O and topology. Values random-walk between ticks.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fleetview::types::{IoSample, ServerNode, Snapshot, Topology};

pub const SERVICES: [&str; 3] = ["persistence", "connector", "registry"];

// users per room server before it reports full
const SERVER_CAPACITY: u64 = 40;
const USERS_PER_ROOM: u64 = 4;
// chance that a node skips its I/O report on a tick
const IO_DROPOUT: f64 = 0.1;

#[derive(Debug, Clone)]
struct Node {
    name: String,
    inbound: f64,
    outbound: f64,
    // None for services, which have no topology entry
    users: Option<u64>,
}

pub struct Fleet {
    nodes: Vec<Node>,
    room_pool: usize,
    rng: StdRng,
}

impl Fleet {
    pub fn new(servers: usize) -> Self {
        Self::with_rng(servers, StdRng::from_os_rng())
    }

    pub fn with_seed(servers: usize, seed: u64) -> Self {
        Self::with_rng(servers, StdRng::seed_from_u64(seed))
    }

    fn with_rng(servers: usize, rng: StdRng) -> Self {
        let services = SERVICES.iter().map(|name| Node {
            name: name.to_string(),
            inbound: 0.0,
            outbound: 0.0,
            users: None,
        });
        let rooms = (1..=servers).map(|i| Node {
            name: format!("server-{i}"),
            inbound: 0.0,
            outbound: 0.0,
            users: Some(0),
        });
        Self {
            nodes: services.chain(rooms).collect(),
            // shared pool so some rooms show up on more than one server
            room_pool: (servers * 2).max(1),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn step(&mut self) -> Snapshot {
        let mut io = Vec::with_capacity(self.nodes.len());
        let mut servers = Vec::new();

        for i in 0..self.nodes.len() {
            let inbound = walk(&mut self.rng, self.nodes[i].inbound, 40.0, 0.0, 1000.0);
            let outbound = walk(&mut self.rng, self.nodes[i].outbound, 60.0, 0.0, 1500.0);
            let users = self.nodes[i].users.map(|u| {
                let delta: i64 = self.rng.random_range(-3..=4);
                u.saturating_add_signed(delta).min(SERVER_CAPACITY)
            });

            let node = &mut self.nodes[i];
            node.inbound = inbound;
            node.outbound = outbound;
            node.users = users;

            if !self.rng.random_bool(IO_DROPOUT) {
                io.push(IoSample {
                    name: node.name.clone(),
                    inbound,
                    outbound,
                });
            }
            if let Some(users) = users {
                let name = node.name.clone();
                let rooms = self.rooms_for(users);
                servers.push(ServerNode {
                    name,
                    users: users as i64,
                    full: users >= SERVER_CAPACITY,
                    rooms,
                });
            }
        }

        Snapshot {
            io,
            tree: Topology { servers },
        }
    }

    fn rooms_for(&mut self, users: u64) -> BTreeMap<String, serde_json::Value> {
        let wanted = users.div_ceil(USERS_PER_ROOM);
        (0..wanted)
            .map(|_| {
                let k = self.rng.random_range(0..self.room_pool);
                (format!("room-{k}"), serde_json::Value::from(1))
            })
            .collect()
    }
}

fn walk(rng: &mut StdRng, prev: f64, step: f64, lo: f64, hi: f64) -> f64 {
    let next = prev + rng.random_range(-step..=step);
    next.clamp(lo, hi).round()
}
