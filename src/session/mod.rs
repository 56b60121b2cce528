pub(crate) mod options;

use crate::{breaker::Breaker, digest::Algorithm, pipeline, source::Source};
use log::{debug, warn};
pub use options::Options;
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
    thread::{self, JoinHandle},
    time::Instant,
};

/// Snapshot of a hashing session's state.
///
/// Exactly one of the digest fields is populated per completed run: the one matching the
/// run's algorithm. The other three stay `None`. `elapsed_millis` is set on success only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// `true` from the moment a run starts (and before any run has started) until the
    /// current run resolves, on success and on failure alike.
    pub is_loading: bool,
    /// `true` if the current run failed; digest fields stay absent in this case.
    pub is_error: bool,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub sha512: Option<String>,
    /// Wall-clock duration of the run in milliseconds, measured from its start.
    pub elapsed_millis: Option<u64>,
}

impl Default for Status {
    /// The initial state mirrors "not yet run": loading, no error, no digests.
    fn default() -> Self {
        Self {
            is_loading: true,
            is_error: false,
            md5: None,
            sha1: None,
            sha256: None,
            sha512: None,
            elapsed_millis: None,
        }
    }
}

impl Status {
    /// Returns whichever digest field is populated, if any.
    pub fn digest(&self) -> Option<&str> {
        self.md5
            .as_deref()
            .or(self.sha1.as_deref())
            .or(self.sha256.as_deref())
            .or(self.sha512.as_deref())
    }

    fn set(&mut self, algorithm: Algorithm, digest: String) {
        match algorithm {
            Algorithm::Md5 => self.md5 = Some(digest),
            Algorithm::Sha1 => self.sha1 = Some(digest),
            Algorithm::Sha256 => self.sha256 = Some(digest),
            Algorithm::Sha512 => self.sha512 = Some(digest),
        }
    }
}

/// `Session` orchestrates hashing runs against a changing input.
///
/// Each call to `hash()` starts a new run on a background thread and supersedes whatever
/// run was in flight: the session bumps a monotonic run counter and a run commits its
/// result into the session state only if its counter value is still current at commit
/// time. A superseded run is left to run to completion, but its late result is discarded
/// rather than overwriting fresher state.
///
/// Within one run, chunks are fetched and folded strictly sequentially, and only the one
/// selected algorithm is computed.
///
/// # Example
///
/// ```
/// use chunkhash::{Algorithm, Buffer, Options};
///
/// let mut session = Options::new().algorithm(Algorithm::Md5).session();
/// session.hash(Buffer::from("Hello, World"), None, None);
/// let status = session.wait();
/// assert_eq!(status.md5.as_deref(), Some("82bb413746aee42f89dea2b59614f9ef"));
/// assert!(!status.is_error);
/// ```
pub struct Session {
    /// Default algorithm for runs of this session.
    algorithm: Algorithm,

    /// Window size used to read sources.
    chunk_size: u64,

    /// Identity of the current run. A run's result is committed only if this counter has
    /// not moved since the run started.
    current: Arc<AtomicU64>,

    /// State shared with run threads and returned by `status()`.
    state: Arc<RwLock<Status>>,

    /// `Breaker` structure for interrupting in-flight runs.
    breaker: Breaker,

    /// Handles of spawned runs, joined by `wait()`.
    handles: Vec<JoinHandle<()>>,
}

impl Default for Session {
    fn default() -> Self {
        Options::new().session()
    }
}

impl Session {
    /// Creates a new session. The most convenient way to create an instance of `Session`
    /// is `Options`, which allows flexible configuration.
    ///
    /// # Parameters
    ///
    /// - `algorithm`: Default algorithm for runs of this session.
    /// - `chunk_size`: Window size in bytes used to read sources; must be at least 1.
    pub fn new(algorithm: Algorithm, chunk_size: u64) -> Self {
        Self {
            algorithm,
            chunk_size,
            current: Arc::new(AtomicU64::new(0)),
            state: Arc::new(RwLock::new(Status::default())),
            breaker: Breaker::new(),
            handles: Vec::new(),
        }
    }

    /// Starts a hashing run for `source` and returns a snapshot of the session state.
    ///
    /// The run executes on a background thread; the returned snapshot reports
    /// `is_loading = true`. Use `status()` to poll or `wait()` to block until resolution.
    /// Calling `hash()` again before the run resolves supersedes it: the session state is
    /// replaced by a fresh loading state and the superseded run's eventual result is
    /// discarded.
    ///
    /// On success the digest is stored under the field matching the algorithm, together
    /// with the elapsed time in milliseconds, and `is_loading` is cleared. On failure
    /// `is_error` is set, `is_loading` is cleared and no digest field is populated.
    ///
    /// # Parameters
    ///
    /// - `source`: The input to hash; the run takes exclusive ownership of it.
    /// - `algorithm`: Algorithm for this run; `None` uses the session's default.
    /// - `chunk_size`: Window size for this run; `None` uses the session's default.
    ///
    /// # Returns
    ///
    /// - A `Status` snapshot taken right after the run has been started.
    pub fn hash<S>(
        &mut self,
        mut source: S,
        algorithm: Option<Algorithm>,
        chunk_size: Option<u64>,
    ) -> Status
    where
        S: Source + Send + 'static,
        pipeline::E: From<<S as Source>::Error>,
    {
        let run = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.breaker.reset();
        {
            let mut state = self.state.write().unwrap();
            *state = Status::default();
        }
        let algorithm = algorithm.unwrap_or(self.algorithm);
        let chunk_size = chunk_size.unwrap_or(self.chunk_size);
        let current = self.current.clone();
        let shared = self.state.clone();
        let breaker = self.breaker.clone();
        let handle = thread::spawn(move || {
            let started = Instant::now();
            let result = pipeline::run(&mut source, algorithm, chunk_size, &breaker);
            let elapsed = started.elapsed().as_millis() as u64;
            let mut state = shared.write().unwrap();
            if current.load(Ordering::SeqCst) != run {
                debug!("run {run} ({algorithm}) has been superseded; result discarded");
                return;
            }
            match result {
                Ok(digest) => {
                    state.is_loading = false;
                    state.is_error = false;
                    state.set(algorithm, digest);
                    state.elapsed_millis = Some(elapsed);
                }
                Err(err) => {
                    warn!("run {run} ({algorithm}) failed: {err}");
                    state.is_loading = false;
                    state.is_error = true;
                }
            }
        });
        self.handles.push(handle);
        self.status()
    }

    /// Returns a snapshot of the session state.
    pub fn status(&self) -> Status {
        self.state.read().unwrap().clone()
    }

    /// Joins all runs started so far and returns the resulting state. Results of
    /// superseded runs stay discarded; the returned state reflects the latest run only.
    pub fn wait(&mut self) -> Status {
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
        self.status()
    }

    /// Returns a `Breaker` which can be used to abort in-flight runs. An aborted run
    /// resolves with `is_error = true` if it is still the current one.
    pub fn breaker(&self) -> Breaker {
        self.breaker.clone()
    }

    /// Default algorithm of this session.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Window size used to read sources.
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }
}

/// Hashes an in-memory string and returns the digest as a lowercase hexadecimal string.
///
/// The whole value is already resident, so it is hashed in one pass; there is no loading
/// or error state. `None` (like an unrecognized label) routes to SHA-256.
///
/// # Example
///
/// ```
/// use chunkhash::{hash_str, Algorithm};
///
/// assert_eq!(
///     hash_str("", Some(Algorithm::Md5)),
///     "d41d8cd98f00b204e9800998ecf8427e"
/// );
/// ```
pub fn hash_str<S: AsRef<str>>(text: S, algorithm: Option<Algorithm>) -> String {
    hex::encode(
        algorithm
            .unwrap_or_default()
            .digest(text.as_ref().as_bytes()),
    )
}

#[cfg(test)]
mod test {
    use super::{hash_str, Options, Status};
    use crate::{
        digest::Algorithm,
        source::Buffer,
        test::{sources, utils},
    };
    use std::time::Duration;

    #[test]
    fn initial_state_is_loading() {
        let status = Options::new().session().status();
        assert_eq!(status, Status::default());
        assert!(status.is_loading);
        assert!(!status.is_error);
        assert!(status.digest().is_none());
        assert!(status.elapsed_millis.is_none());
    }

    #[test]
    fn default_routing_matches_explicit_sha256() {
        let data = utils::fixture(2048);
        let mut session = Options::new().session();
        session.hash(Buffer::from(data.as_slice()), None, None);
        let by_default = session.wait();
        session.hash(Buffer::from(data.as_slice()), Some(Algorithm::Sha256), None);
        let explicit = session.wait();
        assert_eq!(by_default.sha256, explicit.sha256);
        assert!(by_default.sha256.is_some());
        for status in [&by_default, &explicit] {
            assert!(status.md5.is_none());
            assert!(status.sha1.is_none());
            assert!(status.sha512.is_none());
        }
    }

    #[test]
    fn exactly_one_field_is_populated() {
        let data = utils::fixture(1024);
        for algorithm in [
            Algorithm::Md5,
            Algorithm::Sha1,
            Algorithm::Sha256,
            Algorithm::Sha512,
        ] {
            let mut session = Options::new().algorithm(algorithm).session();
            session.hash(Buffer::from(data.as_slice()), None, None);
            let status = session.wait();
            assert!(!status.is_loading);
            assert!(!status.is_error);
            assert!(status.elapsed_millis.is_some());
            let populated = [&status.md5, &status.sha1, &status.sha256, &status.sha512]
                .iter()
                .filter(|field| field.is_some())
                .count();
            assert_eq!(populated, 1, "algorithm: {algorithm}");
            let digest = status.digest().expect("one digest field is populated");
            assert_eq!(digest.len(), algorithm.output_len() * 2);
            assert_eq!(digest, hex::encode(algorithm.digest(&data)));
        }
    }

    #[test]
    fn chunk_size_override_does_not_change_digest() {
        let data = utils::fixture(500);
        let mut session = Options::new().session();
        session.hash(Buffer::from(data.as_slice()), None, Some(7));
        let overridden = session.wait();
        session.hash(Buffer::from(data.as_slice()), None, None);
        let by_default = session.wait();
        assert_eq!(overridden.sha256, by_default.sha256);
        assert!(overridden.sha256.is_some());
    }

    #[test]
    fn empty_input_resolves_without_error() {
        let mut session = Options::new().session();
        session.hash(Buffer::default(), None, None);
        let status = session.wait();
        assert!(!status.is_loading);
        assert!(!status.is_error);
        assert_eq!(
            status.sha256.as_deref(),
            Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn failed_fetch_surfaces_as_error_state() {
        let mut session = Options::new()
            .chunk_size(10)
            .expect("chunk size is valid")
            .session();
        session.hash(sources::Flaky::new(utils::fixture(100), 50), None, None);
        let status = session.wait();
        assert!(!status.is_loading);
        assert!(status.is_error);
        assert!(status.digest().is_none());
        assert!(status.elapsed_millis.is_none());
    }

    #[test]
    fn superseded_run_does_not_overwrite_fresher_state() {
        let data = utils::fixture(256);
        let mut session = Options::new()
            .chunk_size(64)
            .expect("chunk size is valid")
            .session();
        session.hash(
            sources::Slow::new(data.clone(), Duration::from_millis(150)),
            Some(Algorithm::Sha512),
            None,
        );
        session.hash(Buffer::from(data.as_slice()), Some(Algorithm::Md5), None);
        let status = session.wait();
        assert!(!status.is_loading);
        assert!(!status.is_error);
        assert!(status.sha512.is_none());
        assert_eq!(
            status.md5.as_deref(),
            Some(hex::encode(Algorithm::Md5.digest(&data)).as_str())
        );
    }

    #[test]
    fn aborted_run_resolves_with_error() {
        let mut session = Options::new()
            .chunk_size(16)
            .expect("chunk size is valid")
            .session();
        session.hash(
            sources::Slow::new(utils::fixture(256), Duration::from_millis(50)),
            None,
            None,
        );
        session.breaker().abort();
        let status = session.wait();
        assert!(!status.is_loading);
        assert!(status.is_error);
        assert!(status.digest().is_none());
    }

    #[test]
    fn string_hashing_is_total() {
        assert_eq!(
            hash_str("", None),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_str("Hello, World", None),
            "03675ac53ff9cd1535ccc7dfcdfa2c458c5218371f418dc136f2d19ac1fbe8a5"
        );
        assert_eq!(
            hash_str("Hello, World", Some(Algorithm::Sha256)),
            hash_str("Hello, World", None)
        );
        assert_eq!(hash_str("", Some(Algorithm::Md5)).len(), 32);
        assert_eq!(hash_str("", Some(Algorithm::Sha1)).len(), 40);
        assert_eq!(hash_str("", Some(Algorithm::Sha512)).len(), 128);
    }
}
