#![no_main]
use libfuzzer_sys::fuzz_target;

// Feed arbitrary bytes through the decoder. Anything accepted must encode,
// re-decode to the same tree, and (when shallow enough for serde_json's
// recursion limit) satisfy the reference decoder too.
fn decode(data: &[u8]) {
    let Ok(value) = jsonwire::parse_bytes(data) else {
        return;
    };

    let text = jsonwire::encode(&value).expect("decoded trees always encode");
    let again = jsonwire::parse(&text).expect("encoder output is valid JSON");
    assert_eq!(value, again, "round trip changed the tree");

    let stable = jsonwire::encode(&again).expect("re-decoded trees always encode");
    assert_eq!(text, stable, "second round trip changed the bytes");

    // serde_json's default recursion ceiling (128) is lower than ours (512),
    // so only shallow trees can be cross-checked.
    if depth_of(&value) < 100 {
        serde_json::from_str::<serde_json::Value>(&text)
            .expect("reference decoder rejected our output");
    }
}

fn depth_of(value: &jsonwire::Value) -> usize {
    match value {
        jsonwire::Value::Array(elements) => {
            1 + elements.iter().map(depth_of).max().unwrap_or(0)
        }
        jsonwire::Value::Object(members) => {
            1 + members.values().map(depth_of).max().unwrap_or(0)
        }
        _ => 0,
    }
}

fuzz_target!(|data: &[u8]| decode(data));
