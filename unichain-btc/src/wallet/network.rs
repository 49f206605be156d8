use std::{fmt, str::FromStr};

use bitcoin::Network;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Named network a wallet operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetType {
    #[serde(rename = "mainnet")]
    MainNet,
    #[serde(rename = "testnet3")]
    TestNet3,
    /// Regression test network. Historically named "testnet".
    #[serde(rename = "testnet", alias = "regtest")]
    RegTest,
}

impl NetType {
    pub fn network(self) -> Network {
        match self {
            NetType::MainNet => Network::Bitcoin,
            NetType::TestNet3 => Network::Testnet,
            NetType::RegTest => Network::Regtest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NetType::MainNet => "mainnet",
            NetType::TestNet3 => "testnet3",
            NetType::RegTest => "testnet",
        }
    }
}

impl FromStr for NetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(NetType::MainNet),
            "testnet3" => Ok(NetType::TestNet3),
            "testnet" | "regtest" => Ok(NetType::RegTest),
            other => Err(Error::Configuration(format!("unknown btc net: {other}"))),
        }
    }
}

impl fmt::Display for NetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
