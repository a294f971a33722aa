use std::sync::Mutex;

use cryptofacade::{
    default_engine, descriptor_for, engine_state, initialize, initialize_engine, is_initialized,
    key_size_bits, status, CipherAlgorithm, CipherDescriptor, EngineState, ErrorKind,
    HashAlgorithm, HashDescriptor, MathProvider, PrimitiveEngine, PrngDescriptor,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every call and fails the `fail_at`-th one with `code`
struct ScriptedEngine {
    calls: Mutex<Vec<String>>,
    fail_at: Option<(usize, i32)>,
}

impl ScriptedEngine {
    fn new(fail_at: Option<(usize, i32)>) -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_at }
    }

    fn record(&self, call: String) -> i32 {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        match self.fail_at {
            Some((index, code)) if calls.len() - 1 == index => code,
            _ => status::CRYPT_OK,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PrimitiveEngine for ScriptedEngine {
    fn select_math_provider(&self, provider: MathProvider) -> i32 {
        self.record(format!("math:{}", provider.name()))
    }

    fn register_prng(&self, descriptor: &'static PrngDescriptor) -> i32 {
        self.record(format!("prng:{}", descriptor.name))
    }

    fn register_hash(&self, descriptor: &'static HashDescriptor) -> i32 {
        self.record(format!("hash:{}", descriptor.name))
    }

    fn register_cipher(&self, descriptor: &'static CipherDescriptor) -> i32 {
        self.record(format!("cipher:{}", descriptor.name))
    }

    fn secure_random(&self, buf: &mut [u8]) -> usize {
        buf.len()
    }
}

// ----- Initialization Sequence -----

#[test]
fn test_registration_order() {
    init_logger();
    let engine = ScriptedEngine::new(None);
    initialize_engine(&engine, MathProvider::TomMath).unwrap();

    let calls = engine.calls();
    assert_eq!(calls.len(), 1 + 1 + 10 + 2);
    assert_eq!(calls[0], "math:LibTomMath");
    assert_eq!(calls[1], "prng:sprng");
    assert!(calls[2..12].iter().all(|c| c.starts_with("hash:")));
    assert_eq!(calls[12], "cipher:aes");
    assert_eq!(calls[13], "cipher:twofish");
}

#[test]
fn test_stops_at_first_failure() {
    init_logger();
    // Fail the third hash registration
    let engine = ScriptedEngine::new(Some((4, status::CRYPT_MEM)));
    let result = initialize_engine(&engine, MathProvider::TomMath);

    assert_eq!(result, Err(ErrorKind::OutOfMemory));
    assert_eq!(engine.calls().len(), 5);
    assert_eq!(engine.calls()[4], "hash:sha256");
}

#[test]
fn test_prng_failure_is_mapped() {
    init_logger();
    let engine = ScriptedEngine::new(Some((1, status::CRYPT_INVALID_PRNG)));
    assert_eq!(initialize_engine(&engine, MathProvider::Gmp), Err(ErrorKind::BadPrngId));
    assert_eq!(engine.calls(), vec!["math:GNU MP".to_string(), "prng:sprng".to_string()]);
}

#[test]
fn test_unmapped_failure_code_is_unknown() {
    init_logger();
    let engine = ScriptedEngine::new(Some((13, status::CRYPT_INVALID_KEYSIZE)));
    assert_eq!(initialize_engine(&engine, MathProvider::TomMath), Err(ErrorKind::Unknown));
    assert_eq!(engine.calls().len(), 14);
}

#[test]
fn test_initialize_with_dyn_engine() {
    let engine: Box<dyn PrimitiveEngine> = Box::new(ScriptedEngine::new(None));
    assert!(initialize_engine(engine.as_ref(), MathProvider::TomMath).is_ok());
}

// ----- Process-wide Engine -----

#[test]
fn test_process_engine_initialization() {
    init_logger();
    initialize().unwrap();
    assert!(is_initialized());
    assert_eq!(engine_state(), EngineState::Initialized);

    let engine = default_engine();
    for alg in HashAlgorithm::ALL {
        let desc = descriptor_for(alg.id()).unwrap();
        assert_eq!(engine.find_hash(desc.name), Some(desc));
    }
    assert!(engine.find_prng("sprng").is_some());

    // Repeated initialization is tolerated by the software engine
    initialize().unwrap();
    assert_eq!(engine.list_hashes().len(), HashAlgorithm::ALL.len());
}

// ----- Key Sizes -----

#[test]
fn test_key_sizes() {
    let expected = [128, 192, 256, 256, 256, 512, 1024];
    for (alg, bits) in CipherAlgorithm::ALL.iter().zip(expected) {
        assert_eq!(key_size_bits(alg.id()), Ok(bits), "{}", alg.name());
    }
    assert_eq!(key_size_bits(0), Err(ErrorKind::ResourceUnavailable));
    assert_eq!(key_size_bits(8), Err(ErrorKind::ResourceUnavailable));
}
