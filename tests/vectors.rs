//! Known-answer tests against published Bitcoin vectors

use serde::Deserialize;
use keyaddr::crypto::{hash160, CurvePoint, Hash160, PointError};
use keyaddr::encoding::{decode, encode, Base58Error};
use keyaddr::keys::{
    address_from_public_key, public_key_from_secret, secret_from_wif, wif_from_secret,
    wif_from_secret_for, Address, KeyError, PublicKeyBytes, WifKey,
};
use keyaddr::Network;

const BASE58_VECTORS: &str = include_str!("data/base58_encode_decode.json");
const KEY_VECTORS: &str = include_str!("data/key_vectors.json");

#[derive(Debug, Deserialize)]
struct KeyVector {
    secret: String,
    compressed_pubkey: String,
    uncompressed_pubkey: String,
    compressed_address: String,
    uncompressed_address: String,
    testnet_compressed_address: String,
    compressed_wif: String,
    uncompressed_wif: String,
    testnet_compressed_wif: String,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn key_vectors() -> Vec<KeyVector> {
    serde_json::from_str(KEY_VECTORS).unwrap()
}

#[test]
fn test_base58_vectors() {
    init_tracing();
    let vectors: Vec<(String, String)> = serde_json::from_str(BASE58_VECTORS).unwrap();
    assert!(!vectors.is_empty());

    for (hex_input, expected) in vectors {
        let bytes = hex::decode(&hex_input).unwrap();
        assert_eq!(encode(&bytes), expected, "encoding {}", hex_input);
        assert_eq!(decode(&expected).unwrap(), bytes, "decoding {}", expected);
    }
}

#[test]
fn test_secret_one_uncompressed_address() {
    let mut secret = [0u8; 32];
    secret[31] = 1;
    let pubkey = public_key_from_secret(&secret, false).unwrap();
    let address = address_from_public_key(&pubkey);
    assert_eq!(address.as_str(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
}

#[test]
fn test_public_keys() {
    init_tracing();
    for v in key_vectors() {
        let secret = hex::decode(&v.secret).unwrap();

        let compressed = public_key_from_secret(&secret, true).unwrap();
        let uncompressed = public_key_from_secret(&secret, false).unwrap();
        assert_eq!(compressed.to_hex(), v.compressed_pubkey);
        assert_eq!(uncompressed.to_hex(), v.uncompressed_pubkey);
        assert_eq!(compressed.to_point().unwrap(), uncompressed.to_point().unwrap());
    }
}

#[test]
fn test_addresses() {
    for v in key_vectors() {
        let compressed = hex::decode(&v.compressed_pubkey).unwrap();
        let uncompressed = hex::decode(&v.uncompressed_pubkey).unwrap();

        assert_eq!(address_from_public_key(&compressed).as_str(), v.compressed_address);
        assert_eq!(address_from_public_key(&uncompressed).as_str(), v.uncompressed_address);
        assert_eq!(
            Address::from_public_key_for(Network::Testnet, &compressed).as_str(),
            v.testnet_compressed_address
        );

        let parsed = Address::parse(&v.compressed_address).unwrap();
        assert_eq!(parsed.pubkey_hash(), hash160(&compressed));
    }
}

#[test]
fn test_wifs() {
    for v in key_vectors() {
        let secret = hex::decode(&v.secret).unwrap();

        assert_eq!(wif_from_secret(&secret, true).unwrap(), v.compressed_wif);
        assert_eq!(wif_from_secret(&secret, false).unwrap(), v.uncompressed_wif);
        assert_eq!(
            wif_from_secret_for(Network::Testnet, &secret, true).unwrap(),
            v.testnet_compressed_wif
        );

        for wif in [&v.compressed_wif, &v.uncompressed_wif, &v.testnet_compressed_wif] {
            assert_eq!(secret_from_wif(wif).unwrap().as_slice(), secret.as_slice());
        }

        let key = WifKey::decode(&v.testnet_compressed_wif).unwrap();
        assert_eq!(key.network, Network::Testnet);
        assert!(key.compressed);
        assert_eq!(key.address().unwrap().as_str(), v.testnet_compressed_address);
    }
}

#[test]
fn test_serde_representations() {
    let v = &key_vectors()[0];

    let pubkey = PublicKeyBytes::from_hex(&v.compressed_pubkey).unwrap();
    let json = serde_json::to_string(&pubkey).unwrap();
    assert_eq!(json, format!("\"{}\"", v.compressed_pubkey));
    assert_eq!(serde_json::from_str::<PublicKeyBytes>(&json).unwrap(), pubkey);

    let address = Address::parse(&v.uncompressed_address).unwrap();
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json, format!("\"{}\"", v.uncompressed_address));
    assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);

    // a corrupted address is refused at deserialization time
    assert!(serde_json::from_str::<Address>("\"1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZn\"").is_err());

    let digest = hash160(b"abc");
    let json = serde_json::to_string(&digest).unwrap();
    assert_eq!(json, "\"bb1be98c142444d7a56aa3981c3942a978e4dc33\"");
    assert_eq!(serde_json::from_str::<Hash160>(&json).unwrap(), digest);
    assert!(serde_json::from_str::<Hash160>("\"bb1be98c\"").is_err());

    assert_eq!(serde_json::to_string(&Network::Testnet).unwrap(), "\"testnet\"");
    assert_eq!(
        serde_json::from_str::<Network>("\"mainnet\"").unwrap(),
        Network::Mainnet
    );
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<Address>();
    assert_send_sync::<WifKey>();
    assert_send_sync::<PublicKeyBytes>();
    assert_send_sync::<CurvePoint>();
    assert_send_sync::<Hash160>();
    assert_send_sync::<Network>();
    assert_send_sync::<Base58Error>();
    assert_send_sync::<PointError>();
    assert_send_sync::<KeyError>();
}
