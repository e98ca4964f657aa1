//! Pinned streams for two seeds.
//!
//! Each stream of 100 outputs is pinned by the SHA-256 digest of the
//! outputs' little-endian encoding, plus a few leading values in clear.

use grand::Generator;
use sha2::{Digest, Sha256};

const CUSTOM_SEED: i64 = 1275028672939391351;

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes).iter().map(|b| format!("{b:02x}")).collect()
}

/// Digest of the first 100 outputs of `op` on a fresh generator.
fn stream_digest<const N: usize>(
    seed: i64,
    mut op: impl FnMut(&mut Generator) -> [u8; N],
) -> String {
    let mut rng = Generator::seeded(seed);
    let bytes: Vec<u8> = (0..100).flat_map(|_| op(&mut rng)).collect();
    hex_digest(&bytes)
}

fn first<T>(seed: i64, n: usize, mut op: impl FnMut(&mut Generator) -> T) -> Vec<T> {
    let mut rng = Generator::seeded(seed);
    (0..n).map(|_| op(&mut rng)).collect()
}

#[test]
fn exp_float64_stream() {
    assert_eq!(
        first(0, 4, |r| r.exp_float64()),
        vec![4.668112973579268, 0.1601593871172866, 3.0465834105636, 0.06385839451671879]
    );
    assert_eq!(
        stream_digest(0, |r| r.exp_float64().to_le_bytes()),
        "0c431496dbceffe65aaaf47e5ea44a66f1c7195ec470820b909693841df13181"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.exp_float64().to_le_bytes()),
        "05cd3ddc5d89f2f8238c03e3cfcb219e8ca7930801adcc43dbacee3ad82fe3ad"
    );
}

#[test]
fn float32_stream() {
    assert_eq!(
        first(0, 4, |r| r.float32().to_bits()),
        vec![0x3f71f860, 0x3e7ad821, 0x3f27ecc0, 0x3d5e97a5]
    );
    assert_eq!(
        stream_digest(0, |r| r.float32().to_le_bytes()),
        "755ba731d52b86c63cf430b007327156856f5defa3ea1da9d6df23a1897e689e"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.float32().to_le_bytes()),
        "730c57647eeea2463fa52de07f80e549cb33575197611b2bdcd7e58be5562497"
    );
}

#[test]
fn float64_stream() {
    assert_eq!(
        first(0, 4, |r| r.float64()),
        vec![0.9451961492941164, 0.24496508529377975, 0.6559562651954052, 0.05434383959970039]
    );
    assert_eq!(
        stream_digest(0, |r| r.float64().to_le_bytes()),
        "1451fae6210328db7faf35fc7a1713993348e60df68e72eb530aa55f47153891"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.float64().to_le_bytes()),
        "b693bd0ac6842290e8eb699a2dc7bf6c1e007e46038de668dd4ebdc3584ba402"
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn int_stream() {
    assert_eq!(
        stream_digest(0, |r| (r.int() as i64).to_le_bytes()),
        "d5b2b376a19f9312178fd26295eb969ee98a83a4af6896ca9079caee93fface0"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| (r.int() as i64).to_le_bytes()),
        "2c88fffeccacef80046b2b05d422252bede0c68a4936de0120cf6864f6953fa0"
    );
}

#[test]
fn int31_stream() {
    assert_eq!(first(0, 4, |r| r.int31()), vec![2029793274, 526058514, 1408655353, 116702506]);
    assert_eq!(
        stream_digest(0, |r| r.int31().to_le_bytes()),
        "f6abb2f5361838eccfe0500614721351d6176101c2b6a25b1444f1b81230bbfe"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.int31().to_le_bytes()),
        "213be43797d0f90f45331c96ce56cf456d0aeb729be7ef5c8de64c1f868c8db5"
    );
}

#[test]
fn int63_stream() {
    assert_eq!(
        first(CUSTOM_SEED, 4, |r| r.int63()),
        vec![
            5129775219661360826,
            8874392828339876726,
            2079784491896746764,
            6538795046664011206,
        ]
    );
    assert_eq!(
        stream_digest(0, |r| r.int63().to_le_bytes()),
        "d5b2b376a19f9312178fd26295eb969ee98a83a4af6896ca9079caee93fface0"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.int63().to_le_bytes()),
        "2c88fffeccacef80046b2b05d422252bede0c68a4936de0120cf6864f6953fa0"
    );
}

#[test]
fn uint32_stream() {
    assert_eq!(
        first(0, 4, |r| r.uint32()),
        vec![4059586549, 1052117029, 2817310706, 233405013]
    );
    assert_eq!(
        stream_digest(0, |r| r.uint32().to_le_bytes()),
        "cf095fc62bb2e22caf14a1b46fbc9aa8d74332990a11a404c9e24132b3d1c899"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.uint32().to_le_bytes()),
        "cf3df9aa8ac3c11c53fbb59e938307bedcad72423f685377e05a499c78fac42e"
    );
}

#[test]
fn uint64_stream() {
    assert_eq!(
        first(0, 4, |r| r.uint64()),
        vec![
            8717895732742165505,
            2259404117704393152,
            6050128673802995827,
            9724605487393973602,
        ]
    );
    assert_eq!(
        stream_digest(0, |r| r.uint64().to_le_bytes()),
        "bb18fec6d1f37ea4d9dbdfb48085fb80c8d9a3093b7f803f3dd4e2e605644368"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.uint64().to_le_bytes()),
        "28acefaf6efbecf51a04a4b1e6d153998bc8e09514d24d92da3fc897125f9033"
    );
}

#[test]
fn norm_float64_stream() {
    assert_eq!(
        first(0, 4, |r| r.norm_float64()),
        vec![-0.28158587086436215, 0.570933095808067, -1.6920196326157044, 0.1996229111693099]
    );
    assert_eq!(
        stream_digest(0, |r| r.norm_float64().to_le_bytes()),
        "f1472c8fe04b1304c8d4223605a00285960c7a16ee1d5e8e21aa225e45d80f7e"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.norm_float64().to_le_bytes()),
        "b6e8e42e760ee94e57c955b7244fd723cfa07a438bab047fcbedbe27ee54cef8"
    );
}

#[test]
fn intn_stream() {
    assert_eq!(
        first(0, 4, |r| r.intn(100000000).unwrap()),
        vec![29793274, 26058514, 8655353, 16702506]
    );
    assert_eq!(
        first(CUSTOM_SEED, 4, |r| r.intn(123456789).unwrap()),
        vec![83257765, 90921970, 113867194, 40950391]
    );
    assert_eq!(
        stream_digest(0, |r| (r.intn(100000000).unwrap() as i64).to_le_bytes()),
        "49bca9357d49929db21b108772a4c7038b47ef5adc7aa0a29a94e4b95064d56e"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| (r.intn(123456789).unwrap() as i64).to_le_bytes()),
        "9d3e2b56e816ec4257166cbe6b09d2d09a9b846bd07bce1a89ef2df170870344"
    );
}

#[test]
fn int31n_stream() {
    assert_eq!(
        stream_digest(0, |r| r.int31n(100000000).unwrap().to_le_bytes()),
        "f44045a74a4ffbadde0c7cadf48e619d890424191d4526486ec2359e7ab6c1dc"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.int31n(123456789).unwrap().to_le_bytes()),
        "538686ec9d527287630b477ff70b58521a9c7c216b81d1728f2a311e1b4d8ddc"
    );
}

#[test]
fn int63n_stream() {
    assert_eq!(
        first(0, 4, |r| r.int63n(100000000).unwrap()),
        vec![42165505, 4393152, 2995827, 39197794]
    );
    assert_eq!(
        stream_digest(0, |r| r.int63n(100000000).unwrap().to_le_bytes()),
        "53316c47e07dd8b2ae6aea0fbb1c0d1ca28540723e4d2550e8cd8289089cd059"
    );
    assert_eq!(
        stream_digest(CUSTOM_SEED, |r| r.int63n(123456789).unwrap().to_le_bytes()),
        "80073e5d5c947dd8a88a313b13f772a9b061824789e7b74bd700296827f6a975"
    );
}

#[test]
fn perm_stream() {
    let mut rng = Generator::seeded(0);
    assert_eq!(rng.perm(10).unwrap(), vec![8, 2, 3, 0, 5, 7, 1, 6, 9, 4]);
    assert_eq!(rng.perm(10).unwrap(), vec![5, 8, 7, 6, 9, 3, 0, 4, 1, 2]);

    let perm_digest = |seed: i64, n: isize| {
        let mut rng = Generator::seeded(seed);
        let bytes: Vec<u8> = (0..100)
            .flat_map(|_| rng.perm(n).unwrap())
            .flat_map(|v| (v as u64).to_le_bytes())
            .collect();
        hex_digest(&bytes)
    };

    assert_eq!(
        perm_digest(0, 10),
        "df0d39086c19f518e97bc3be0626c4328500b8b30c3d1c88f9ea2b2d5877c80b"
    );
    assert_eq!(
        perm_digest(CUSTOM_SEED, 15),
        "06ebc6acc0e9acb0840fb63f5d0ef7c6516e2a861b42778922113461126682d7"
    );
}

#[test]
fn read_stream() {
    let mut rng = Generator::seeded(CUSTOM_SEED);
    let mut buf = [0u8; 15];

    rng.read(&mut buf);
    assert_eq!(hex(&buf), "ba4e8431629f3076f37842422d280c");
    rng.read(&mut buf);
    assert_eq!(hex(&buf), "33dfe8f9e0dcc6fd7d6f7377bebd23");

    let read_digest = |seed: i64, size: usize| {
        let mut rng = Generator::seeded(seed);
        let mut bytes = Vec::new();
        for _ in 0..100 {
            let mut buf = vec![0u8; size];
            assert_eq!(rng.read(&mut buf), size);
            bytes.extend_from_slice(&buf);
        }
        hex_digest(&bytes)
    };

    assert_eq!(
        read_digest(0, 10),
        "971cb7c3bd3485c2c18cf562814350b194f5ae6e80262f096b2937d9d201afd5"
    );
    assert_eq!(
        read_digest(CUSTOM_SEED, 15),
        "52b1ae9020dbd91428ddf8b64d8eabde515e2feb515de3bd63305256e2614dd2"
    );
}

#[test]
fn repeated_shuffle_in_place() {
    let input: [u8; 10] = [0xba, 0x4e, 0x84, 0x31, 0x62, 0x9f, 0x30, 0x76, 0xf3, 0x78];

    let mut rng = Generator::seeded(0);
    let mut slice = input;

    rng.shuffle(slice.len() as isize, |i, j| slice.swap(i, j)).unwrap();
    assert_eq!(hex(&slice), "317662304ef3ba9f8478");

    for _ in 1..100 {
        rng.shuffle(slice.len() as isize, |i, j| slice.swap(i, j)).unwrap();
    }
    assert_eq!(hex(&slice), "30624e789f3184baf376");

    let mut rng = Generator::seeded(CUSTOM_SEED);
    let mut slice: Vec<u8> = input.iter().chain(&input[..5]).copied().collect();

    for _ in 0..100 {
        rng.shuffle_slice(&mut slice);
    }
    assert_eq!(hex(&slice), "9f4ef362ba76313084843178ba624e");
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
