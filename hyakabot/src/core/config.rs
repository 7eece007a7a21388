use std::{env, path::PathBuf};

use eyre::Result;
use once_cell::sync::OnceCell;

static CONFIG: OnceCell<BotConfig> = OnceCell::new();

#[derive(Debug)]
pub struct BotConfig {
    pub tokens: Tokens,
    pub hyakanime_api: Box<str>,
    pub logo_url: Box<str>,
    pub paths: Paths,
}

#[derive(Debug)]
pub struct Tokens {
    pub discord: Box<str>,
}

#[derive(Debug)]
pub struct Paths {
    pub assets: PathBuf,
}

impl BotConfig {
    pub fn get() -> &'static Self {
        CONFIG
            .get()
            .expect("`BotConfig::init` must be called first")
    }

    pub fn init() -> Result<()> {
        let config = BotConfig {
            tokens: Tokens {
                discord: env_var("DISCORD_TOKEN")?,
            },
            hyakanime_api: env_var("HYAKANIME_API")?,
            logo_url: env_var("HYAKANIME_LOGO_URL")?,
            paths: Paths {
                assets: env_var("ASSETS_PATH")?,
            },
        };

        if CONFIG.set(config).is_err() {
            warn!("CONFIG was already set");
        }

        Ok(())
    }
}

trait EnvKind: Sized {
    const EXPECTED: &'static str;

    fn from_str(s: String) -> Result<Self, String>;
}

macro_rules! env_kind {
    ($($ty:ty: |$arg:ident| $impl:block,)*) => {
        $(
            impl EnvKind for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_str($arg: String) -> Result<Self, String> {
                    $impl
                }
            }
        )*
    };
}

env_kind! {
    Box<str>: |s| { Ok(s.into_boxed_str()) },
    PathBuf: |s| { s.parse().map_err(|_| s) },
}

fn env_var<T: EnvKind>(name: &str) -> Result<T> {
    let value = env::var(name).map_err(|_| eyre!("missing env variable `{name}`"))?;

    T::from_str(value).map_err(|value| {
        eyre!(
            "failed to parse env variable `{name}={value}`; expected {expected}",
            expected = T::EXPECTED
        )
    })
}
