use serde_json::json;
use tokio::runtime::Runtime;
use unichain_btc::{
    FeeRate, SyncChainBackend,
    bitcoin::{
        Address, Amount, Network, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut,
        Witness, absolute::LockTime, address::NetworkUnchecked, consensus::encode::serialize_hex,
        transaction::Version,
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

use crate::{SyncGatewayBackend, SyncGatewayClient};

const ADDRESS: &str = "mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn";

// the blocking client must not run inside the server's runtime
fn start_server(rt: &Runtime, mocks: Vec<Mock>) -> MockServer {
    rt.block_on(async {
        let server = MockServer::start().await;
        for mock in mocks {
            mock.mount(&server).await;
        }
        server
    })
}

fn address() -> Address {
    ADDRESS
        .parse::<Address<NetworkUnchecked>>()
        .unwrap()
        .require_network(Network::Testnet)
        .unwrap()
}

#[test]
fn fetches_spendable_outputs() {
    let rt = Runtime::new().unwrap();
    let txid = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
    let server = start_server(
        &rt,
        vec![
            Mock::given(method("POST"))
                .and(path("/btc/getUtxo"))
                .and(body_json(json!({ "address": ADDRESS })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                    "address": ADDRESS,
                    "txid": txid,
                    "vout": 2,
                    "scriptPubKey": "76a914243f1394f44554f4ce3fd68649c19adc483ce92488ac",
                    "amount": 0.0005,
                    "satoshis": 50_000,
                    "height": 120,
                    "confirmations": 4
                }])))
                .expect(1),
        ],
    );

    let backend = SyncGatewayBackend::new(server.uri()).unwrap();
    let outputs = backend.spendable_outputs(&address()).unwrap();

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].value, Amount::from_sat(50_000));
    assert_eq!(outputs[0].vout, 2);
    assert_eq!(outputs[0].height, 120);
}

#[test]
fn estimates_fee_rate() {
    let rt = Runtime::new().unwrap();
    let server = start_server(
        &rt,
        vec![
            Mock::given(method("POST"))
                .and(path("/btc/estimatefee"))
                .and(body_json(json!({ "nbBlocks": 3 })))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({ "satoshi": "0x000a" })),
                ),
        ],
    );

    let backend = SyncGatewayBackend::new(server.uri()).unwrap();
    assert_eq!(backend.fee_rate(3).unwrap(), FeeRate::from_sat_per_byte(10));
}

#[test]
fn error_status_carries_message() {
    let rt = Runtime::new().unwrap();
    let server = start_server(
        &rt,
        vec![
            Mock::given(method("POST"))
                .and(path("/btc/send"))
                .respond_with(
                    ResponseTemplate::new(400)
                        .set_body_json(json!({ "code": -26, "message": "dust" })),
                ),
        ],
    );

    let client = SyncGatewayClient::new(server.uri()).unwrap();
    let err = client.send("00".to_string()).unwrap_err();

    assert_eq!(err.to_string(), "(400) dust");
    assert!(matches!(
        err.downcast_ref::<crate::Error>(),
        Some(crate::Error::Status { status: 400, .. })
    ));
}

#[test]
fn broadcast_returns_txid() {
    let rt = Runtime::new().unwrap();
    let tx = Transaction {
        version: Version::ONE,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: ScriptBuf::new(),
            sequence: Sequence::MAX,
            witness: Witness::new(),
        }],
        output: vec![TxOut {
            value: Amount::from_sat(2_000),
            script_pubkey: address().script_pubkey(),
        }],
    };
    let raw = serialize_hex(&tx);
    let server = start_server(
        &rt,
        vec![
            Mock::given(method("POST"))
                .and(path("/btc/send"))
                .and(body_json(json!({ "rawtx": raw })))
                .respond_with(ResponseTemplate::new(200))
                .expect(1),
        ],
    );

    let backend = SyncGatewayBackend::new(server.uri()).unwrap();
    assert_eq!(backend.broadcast(&raw).unwrap(), tx.compute_txid());
}

#[test]
fn broadcast_rejects_garbage_before_sending() {
    let rt = Runtime::new().unwrap();
    let server = start_server(
        &rt,
        vec![
            Mock::given(method("POST"))
                .and(path("/btc/send"))
                .respond_with(ResponseTemplate::new(200))
                .expect(0),
        ],
    );

    let backend = SyncGatewayBackend::new(server.uri()).unwrap();
    assert!(backend.broadcast("deadbeef").is_err());
}
