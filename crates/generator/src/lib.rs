// Rust guideline compliant 2026-10-12

//! Generator component -- produces synthetic job-posting batches and writes
//! them to a `JobSink` hexagonal port.
//!
//! Stands in for a live scraper: each record is drawn from a pool of scam
//! templates or a pool of legitimate ones.
//!
//! Entry points: [`Generator::generate_batch`], [`Generator::produce_once`],
//! [`Generator::run`]. Configuration via [`GeneratorConfig::builder`].

use domain::{BufferError, JobRecord, JobSink};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cell::RefCell;
use std::time::Duration;

// ---------------------------------------------------------------------------
// GeneratorError
// ---------------------------------------------------------------------------

/// Errors that can occur during record generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The supplied configuration is invalid.
    #[error("invalid generator configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A queue write failed.
    #[error("buffer error: {source}")]
    Buffer {
        /// The underlying buffer error.
        #[from]
        source: BufferError,
    },
}

// ---------------------------------------------------------------------------
// GeneratorConfig + builder
// ---------------------------------------------------------------------------

/// Scam share used when none is configured, and for scam-typical queries.
pub const SCAM_QUERY_PROBABILITY: f64 = 0.7;
/// Scam share for ordinary queries.
pub const ORDINARY_QUERY_PROBABILITY: f64 = 0.2;

/// Runtime configuration for a [`Generator`].
///
/// Construct via [`GeneratorConfig::builder`].
#[derive(Debug)]
pub struct GeneratorConfig {
    /// Maximum number of records per batch (range: `[1, max_batch]`).
    pub max_batch: usize,
    /// Delay between successive batch writes.
    pub poll_interval: Duration,
    /// Optional upper bound on the number of iterations. `None` means infinite.
    pub iterations: Option<u64>,
    /// Optional RNG seed for reproducible batches. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability in `[0, 1]` that a record is drawn from the scam pool.
    pub scam_probability: f64,
}

/// Builder for [`GeneratorConfig`].
///
/// Obtain via [`GeneratorConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    max_batch: usize,
    poll_interval: Duration,
    iterations: Option<u64>,
    seed: Option<u64>,
    scam_probability: f64,
}

impl GeneratorConfig {
    /// Create a builder. `max_batch` is the only required parameter.
    ///
    /// Default values: `poll_interval = 100 ms`, `iterations = None`,
    /// `seed = None`, `scam_probability = 0.7`.
    #[must_use]
    pub fn builder(max_batch: usize) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            max_batch,
            poll_interval: Duration::from_millis(100),
            iterations: None,
            seed: None,
            scam_probability: SCAM_QUERY_PROBABILITY,
        }
    }
}

impl GeneratorConfigBuilder {
    /// Override the inter-batch delay.
    #[must_use]
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Set a finite iteration count. Without this the generator runs until the
    /// queue signals `Closed`.
    #[must_use]
    pub fn iterations(mut self, n: u64) -> Self {
        self.iterations = Some(n);
        self
    }

    /// Fix the RNG seed for deterministic output (useful in tests).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the scam share.
    #[must_use]
    pub fn scam_probability(mut self, p: f64) -> Self {
        self.scam_probability = p;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] when `max_batch` is zero or
    /// `scam_probability` lies outside `[0, 1]`.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<GeneratorConfig, GeneratorError> {
        if self.max_batch == 0 {
            return Err(GeneratorError::InvalidConfig {
                reason: "max_batch must be >= 1".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.scam_probability) {
            return Err(GeneratorError::InvalidConfig {
                reason: format!("scam_probability must lie in [0, 1], got {}", self.scam_probability),
            });
        }
        Ok(GeneratorConfig {
            max_batch: self.max_batch,
            poll_interval: self.poll_interval,
            iterations: self.iterations,
            seed: self.seed,
            scam_probability: self.scam_probability,
        })
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// Query terms that make scam postings the majority of results.
const SCAM_QUERY_TERMS: &[&str] = &[
    "data entry",
    "easy money",
    "work from home",
    "envelope stuffing",
    "mystery shopper",
    "crypto",
    "personal assistant",
    "make money fast",
];

const SCAM_COMPANIES: &[&str] = &[
    "QuickCash Solutions",
    "EasyMoney Corp",
    "HomeWorkPro",
    "FastBucks LLC",
    "MoneyMaker Systems",
    "WorkFromHome Inc",
    "InstantPay Solutions",
    "CashFlow Enterprises",
    "EarnFast Company",
    "ProfitNow LLC",
];

const SCAM_TITLES: &[&str] = &[
    "EASY MONEY WORK FROM HOME!!!",
    "Make $5000/Week Data Entry",
    "Personal Assistant - URGENT HIRING",
    "Envelope Stuffing - Quick Cash",
    "Mystery Shopper - Immediate Start",
    "Crypto Trading Assistant - High Pay",
    "Work From Home - No Experience!",
    "Data Entry Clerk - $50/Hour",
    "Virtual Assistant - HIRING NOW!",
    "Online Survey Taker - Easy Money",
];

const SCAM_DESCRIPTIONS: &[&str] = &[
    "Make $5000 per week working from home! No experience needed! Just pay $99 registration \
     fee and start earning immediately! Contact us on WhatsApp: +1234567890. Send your bank \
     account details to get started.",
    "URGENT HIRING! Personal assistant needed ASAP! Earn $4000 weekly! Must pay $50 background \
     check fee upfront. Text us at +1987654321 for immediate employment. Provide SSN for \
     verification.",
    "Easy data entry work! $45 per hour! Work flexible schedule from home! Send $75 training fee \
     to training@quickcash-solutions.com to begin. No skills required!",
    "Mystery shopper positions available! Get paid to shop! Earn $300 per assignment! Must \
     invest $200 in starter kit. Contact mysteryshopper@gmail.com immediately!",
    "Crypto trading opportunity! Make $10000 monthly! No experience necessary! Send $500 \
     investment fee to get started. WhatsApp only: +1555123456. Act fast - limited spots!",
    "Envelope stuffing from home! Earn $2000 weekly! Pay $25 processing fee and we'll send \
     materials. Email your bank account info to payments@homeworkpro.net. Start today!",
    "Online surveys - easy money! $200 daily! Pay $35 registration fee to unlock high-paying \
     surveys. Send payment to surveys@earnfast.com. Hiring immediately!",
    "Virtual assistant - WORK FROM HOME! $60/hour! Must provide social security number and ID \
     scan for background check. Pay $40 administration fee. Contact via Telegram: @VirtualJobs",
];

const SCAM_LOCATIONS: &[&str] = &["Remote", "Work from Home", "Anywhere", "USA"];

const SCAM_SALARIES: &[&str] = &[
    "$5000 per week",
    "$4000 weekly",
    "$200 daily",
    "$50 per hour",
    "$300 per assignment",
    "$10000 monthly",
    "$2000 weekly",
];

const SCAM_POST_DATES: &[&str] = &["1 day ago", "2 days ago", "3 days ago", "Just posted"];

const LEGIT_COMPANIES: &[&str] = &[
    "Microsoft",
    "Google",
    "Apple",
    "Amazon",
    "Meta",
    "Netflix",
    "Adobe",
    "Salesforce",
    "Oracle",
    "IBM",
    "Intel",
    "Cisco",
    "VMware",
    "Uber",
];

const LEGIT_TITLES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "UX Designer",
    "Marketing Specialist",
    "Sales Representative",
    "Account Manager",
    "Business Analyst",
    "Content Writer",
    "Customer Support Specialist",
];

const LEGIT_DESCRIPTIONS: &[&str] = &[
    "We are looking for a skilled software engineer with experience in Python, JavaScript, and \
     AWS. You will work on developing scalable web applications and APIs. Strong \
     problem-solving skills required.",
    "Join our data science team to build machine learning models and analyze large datasets. \
     Experience with SQL, Python, and statistical analysis required. Competitive salary and \
     benefits.",
    "Seeking a product manager to lead cross-functional teams and drive product strategy. MBA \
     preferred. Experience in tech industry required. Excellent communication skills essential.",
    "UX Designer needed to create user-centered designs for our mobile applications. \
     Proficiency in Figma, Sketch, and user research methods required. Portfolio required for \
     application.",
    "Marketing specialist to develop and execute marketing campaigns across digital channels. \
     Experience with Google Analytics, social media marketing, and content creation required.",
];

const LEGIT_LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Seattle, WA",
    "Austin, TX",
    "Boston, MA",
    "Chicago, IL",
    "Los Angeles, CA",
    "Remote",
];

const LEGIT_SALARIES: &[&str] = &[
    "$120,000 - $150,000",
    "$100,000 - $130,000",
    "$80,000 - $110,000",
    "$150,000 - $200,000",
    "$90,000 - $120,000",
    "Competitive salary",
];

const LEGIT_POST_DATES: &[&str] = &["1 day ago", "2 days ago", "1 week ago", "5 days ago"];

/// Every generated record claims to come from this platform.
pub const SOURCE_PLATFORM: &str = "Indeed";

/// One pool of posting templates.
struct Templates {
    titles: &'static [&'static str],
    companies: &'static [&'static str],
    descriptions: &'static [&'static str],
    locations: &'static [&'static str],
    salaries: &'static [&'static str],
    post_dates: &'static [&'static str],
    url_prefix: &'static str,
}

const SCAM: Templates = Templates {
    titles: SCAM_TITLES,
    companies: SCAM_COMPANIES,
    descriptions: SCAM_DESCRIPTIONS,
    locations: SCAM_LOCATIONS,
    salaries: SCAM_SALARIES,
    post_dates: SCAM_POST_DATES,
    url_prefix: "mock",
};

const LEGIT: Templates = Templates {
    titles: LEGIT_TITLES,
    companies: LEGIT_COMPANIES,
    descriptions: LEGIT_DESCRIPTIONS,
    locations: LEGIT_LOCATIONS,
    salaries: LEGIT_SALARIES,
    post_dates: LEGIT_POST_DATES,
    url_prefix: "legit",
};

/// Index is always in bounds: derived from `len()` of a non-empty pool.
fn pick(rng: &mut StdRng, pool: &[&str]) -> String {
    pool[rng.random_range(0..pool.len())].to_owned()
}

impl Templates {
    fn draw(&self, rng: &mut StdRng) -> JobRecord {
        let job_key = rng.random_range(100_000..=999_999u32);
        JobRecord {
            job_title: Some(pick(rng, self.titles)),
            company_name: Some(pick(rng, self.companies)),
            job_description: Some(pick(rng, self.descriptions)),
            location: Some(pick(rng, self.locations)),
            salary_range: Some(pick(rng, self.salaries)),
            post_date: Some(pick(rng, self.post_dates)),
            original_url: Some(format!(
                "https://www.indeed.com/viewjob?jk={}{job_key}",
                self.url_prefix
            )),
            source_platform: Some(SOURCE_PLATFORM.to_owned()),
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generates synthetic job-posting batches and forwards them to a [`JobSink`] port.
///
/// Generic over `S: JobSink` per call; holds no concrete queue reference.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    /// Interior mutability required because all public methods take `&self`.
    rng: RefCell<StdRng>,
}

impl Generator {
    /// Create a new generator from `config`.
    ///
    /// Seeds the RNG from `config.seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng: RefCell::new(rng),
        }
    }

    /// Scam share a search for `query` would return: high for scam-typical
    /// terms, low otherwise. Case-insensitive substring match.
    #[must_use]
    pub fn scam_probability_for_query(query: &str) -> f64 {
        let query = query.to_lowercase();
        if SCAM_QUERY_TERMS.iter().any(|term| query.contains(term)) {
            SCAM_QUERY_PROBABILITY
        } else {
            ORDINARY_QUERY_PROBABILITY
        }
    }

    /// Generate one batch of postings.
    ///
    /// Batch size is uniformly distributed in `[1, config.max_batch]`. Each
    /// record is drawn from the scam pool with probability
    /// `config.scam_probability`, otherwise from the legitimate pool.
    #[must_use]
    pub fn generate_batch(&self) -> Vec<JobRecord> {
        let mut rng = self.rng.borrow_mut();
        let size = rng.random_range(1..=self.config.max_batch);
        (0..size)
            .map(|_| {
                if rng.random_bool(self.config.scam_probability) {
                    SCAM.draw(&mut rng)
                } else {
                    LEGIT.draw(&mut rng)
                }
            })
            .collect()
    }

    /// Generate one batch and write it to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates any [`BufferError`] wrapped in [`GeneratorError::Buffer`].
    pub async fn produce_once<S: JobSink>(&self, sink: &S) -> Result<(), GeneratorError> {
        let batch = self.generate_batch();
        tracing::debug!(size = batch.len(), "generator.batch.generated");
        sink.write_batch(batch).await?;
        Ok(())
    }

    /// Run the generation loop until stopped.
    ///
    /// Calls [`produce_once`](Self::produce_once) repeatedly, sleeping
    /// `config.poll_interval` between iterations. Stops cleanly when:
    /// - the sink signals [`BufferError::Closed`] (returns `Ok(())`), or
    /// - `config.iterations` batches have been written (returns `Ok(())`).
    ///
    /// # Errors
    ///
    /// Propagates any error from [`produce_once`](Self::produce_once) other than
    /// queue `Closed`.
    pub async fn run<S: JobSink>(&self, sink: &S) -> Result<(), GeneratorError> {
        let mut count = 0u64;
        loop {
            match self.produce_once(sink).await {
                Ok(()) => {}
                Err(GeneratorError::Buffer {
                    source: BufferError::Closed,
                }) => {
                    tracing::info!(iterations = count, "generator.run.stopped: queue closed");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }

            count += 1;
            tracing::info!(iteration = count, "generator.batch.written");

            if let Some(max) = self.config.iterations
                && count >= max
            {
                tracing::info!("generator.run.stopped: iteration limit reached");
                return Ok(());
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
