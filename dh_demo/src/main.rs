use clap::Parser;
use dh_crypto::crypto::params::{DEMO_GENERATOR, DEMO_PRIME_HEX, DEMO_PRIME_RADIX};
use dh_crypto::{DhParameters, DiffieHellman, DEFAULT_KEY_BIT_LENGTH};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(
    name = "dh_demo",
    about = "Runs a Diffie-Hellman exchange between two in-process parties"
)]
struct Args {
    /// Prime modulus p
    #[arg(long, default_value = DEMO_PRIME_HEX)]
    prime: String,

    /// Radix of --prime (10 or 16)
    #[arg(long, default_value_t = DEMO_PRIME_RADIX)]
    prime_radix: u32,

    /// Generator g, decimal
    #[arg(long, default_value = DEMO_GENERATOR)]
    generator: String,

    /// Private exponent length in bits
    #[arg(long, default_value_t = DEFAULT_KEY_BIT_LENGTH)]
    bit_length: usize,

    /// Seed for reproducible keys; OS randomness otherwise
    #[arg(long)]
    seed: Option<u64>,

    /// Let the first party pick small random g and p (insecure, demo only)
    #[arg(long)]
    insecure_random_params: bool,
}

fn hex_prefix(value: &BigInt) -> String {
    let (_, bytes) = value.to_bytes_be();
    let prefix = hex::encode(&bytes[..bytes.len().min(16)]);
    if bytes.len() > 16 {
        format!("{prefix}...")
    } else {
        prefix
    }
}

fn make_rng(seed: Option<u64>, party: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(party)),
        None => StdRng::from_entropy(),
    }
}

/// One side of the exchange: build our engine, send our public key and
/// derive the secret from the peer's.
async fn run_party(
    name: &'static str,
    params: DhParameters,
    bit_length: usize,
    mut rng: StdRng,
    tx: mpsc::Sender<BigInt>,
    mut rx: mpsc::Receiver<BigInt>,
) -> Result<BigInt, String> {
    let mut dh = DiffieHellman::try_new(params, bit_length, &mut rng)
        .map_err(|e| format!("{name} failed to generate keys: {e}"))?;
    println!("{name} public key: {}", hex_prefix(dh.public_key()));

    tx.send(dh.public_key().clone())
        .await
        .map_err(|e| format!("{name} failed to send public key: {e}"))?;
    let peer_public = rx
        .recv()
        .await
        .ok_or_else(|| format!("{name} peer hung up before sending its public key"))?;

    let key = dh
        .try_generate_secret_key(&peer_public)
        .map_err(|e| format!("{name} failed to derive shared secret: {e}"))?;
    println!("{name} computed key: {key}");
    Ok(key)
}

/// Runs both parties as tasks wired to each other and returns their secrets.
async fn run_exchange(
    params: DhParameters,
    bit_length: usize,
    seed: Option<u64>,
) -> Result<(BigInt, BigInt), Box<dyn std::error::Error>> {
    let (app_tx, esp_rx) = mpsc::channel(1);
    let (esp_tx, app_rx) = mpsc::channel(1);

    let app = tokio::spawn(run_party(
        "APP",
        params.clone(),
        bit_length,
        make_rng(seed, 0),
        app_tx,
        app_rx,
    ));
    let esp = tokio::spawn(run_party(
        "ESP",
        params,
        bit_length,
        make_rng(seed, 1),
        esp_tx,
        esp_rx,
    ));

    Ok((app.await??, esp.await??))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = if args.insecure_random_params {
        log::warn!("Using insecure random parameters");
        DhParameters::random_insecure(&mut make_rng(args.seed, 2))
    } else {
        DhParameters::parse(&args.generator, 10, &args.prime, args.prime_radix)?
    };

    println!("=== Diffie-Hellman Key Exchange Demo ===");
    println!("  Prime p: {}", hex_prefix(&params.p));
    println!("  Generator g: {}", params.g);
    println!("  Private key length: {} bits\n", args.bit_length);

    let (key_a, key_b) = run_exchange(params, args.bit_length, args.seed).await?;

    if key_a == key_b {
        println!("Key exchange successful! Both parties have the same shared key.");
        Ok(())
    } else {
        println!("Key exchange failed! The keys do not match.");
        Err("shared secret mismatch".into())
    }
}
