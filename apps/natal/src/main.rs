use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urania::{
    default_natal_input, ChartCalculator, HouseSystem, JsonFileProfileStore, NatalInput,
    ProfileRecord, ProfileRepository,
};
use urania_config::UraniaSettings;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Profile store file (default: from configs/urania.toml).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a chart and print it as JSON.
    Chart {
        /// Saved profile to chart (default: the current profile).
        #[arg(long)]
        profile: Option<String>,

        #[command(flatten)]
        birth: BirthArgs,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// List saved profiles; the current one is marked with `*`.
    List,
    /// Save birth data as a new profile.
    Save {
        #[command(flatten)]
        birth: BirthArgs,

        /// Make the new profile current.
        #[arg(long)]
        select: bool,
    },
    /// Make a saved profile current.
    Select { id: String },
    /// Delete a saved profile.
    Remove { id: String },
}

/// Fields given here override the base input field by field.
#[derive(Args, Debug)]
struct BirthArgs {
    #[arg(long)]
    name: Option<String>,

    /// Birth date, `YYYY-MM-DD`.
    #[arg(long)]
    date: Option<String>,

    /// Local clock time, `HH:MM`.
    #[arg(long)]
    time: Option<String>,

    /// UTC offset, `+HH:MM` or `-HH:MM`.
    #[arg(long, allow_hyphen_values = true)]
    timezone: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// East-positive longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Placidus, Koch or Equal (default: from configs/urania.toml).
    #[arg(long)]
    house_system: Option<String>,
}

impl BirthArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.timezone.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.house_system.is_none()
    }

    fn apply(self, mut input: NatalInput, default_system: HouseSystem) -> anyhow::Result<NatalInput> {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(date) = self.date {
            input.date = date;
        }
        if let Some(time) = self.time {
            input.time = time;
        }
        if let Some(timezone) = self.timezone {
            input.timezone = timezone;
        }
        if let Some(latitude) = self.latitude {
            input.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            input.longitude = longitude;
        }
        input.house_system = match self.house_system {
            Some(name) => HouseSystem::from_name(&name)
                .ok_or_else(|| anyhow::anyhow!("Unknown house system: {name}"))?,
            None => default_system,
        };
        Ok(input)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = urania_config::load_settings().context("Failed to load settings")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    match &settings.config_path {
        Some(path) => log::debug!("Loaded settings from {}", path.display()),
        None => log::debug!(
            "No urania.toml found in {:?}; using defaults",
            urania_config::config_search_paths()
        ),
    }

    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(|| settings.profile_store_path.clone());
    let mut store = JsonFileProfileStore::open(&store_path)
        .with_context(|| format!("Failed to open profile store {}", store_path.display()))?;

    match cli.command {
        Command::Chart {
            profile,
            birth,
            pretty,
        } => run_chart(&store, &settings, profile, birth, pretty),
        Command::List => {
            let current = store.current().map(|p| p.id.clone());
            for profile in store.list() {
                let marker = if current.as_deref() == Some(profile.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {}  {}  {} {} {}",
                    marker,
                    profile.id,
                    profile.label,
                    profile.input.date,
                    profile.input.time,
                    profile.input.timezone
                );
            }
            Ok(())
        }
        Command::Save { birth, select } => {
            let input = input_to_save(birth, settings.house_system)?;
            // Reject input that cannot be charted before it is stored
            ChartCalculator::new()
                .calculate(&input)
                .context("Invalid birth data")?;
            let record = ProfileRecord::from_input(input);
            let id = record.id.clone();
            store.upsert(record)?;
            if select {
                store.set_current(&id)?;
            }
            println!("{id}");
            Ok(())
        }
        Command::Select { id } => {
            store.set_current(&id)?;
            log::info!("Current profile is now {}", id);
            Ok(())
        }
        Command::Remove { id } => {
            if store.get(&id).is_none() {
                anyhow::bail!("Unknown profile id: {id}");
            }
            store.delete(&id)?;
            log::info!("Removed profile {}", id);
            Ok(())
        }
    }
}

/// Birth fields over the sample input; at least one field must be given
fn input_to_save(birth: BirthArgs, default_system: HouseSystem) -> anyhow::Result<NatalInput> {
    if birth.is_empty() {
        anyhow::bail!(
            "Nothing to save; pass at least one of --name, --date, --time, --timezone, \
             --latitude, --longitude or --house-system"
        );
    }
    birth.apply(default_natal_input(), default_system)
}

fn run_chart(
    store: &JsonFileProfileStore,
    settings: &UraniaSettings,
    profile: Option<String>,
    birth: BirthArgs,
    pretty: bool,
) -> anyhow::Result<()> {
    let base = match profile {
        Some(id) => store
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("Unknown profile id: {id}"))?
            .input
            .clone(),
        None => match store.current() {
            Some(current) => current.input.clone(),
            None => NatalInput {
                house_system: settings.house_system,
                ..default_natal_input()
            },
        },
    };
    let default_system = base.house_system;
    let input = birth.apply(base, default_system)?;

    let chart = ChartCalculator::new()
        .calculate(&input)
        .with_context(|| format!("Failed to calculate chart for {:?}", input.name))?;

    let json = if pretty {
        serde_json::to_string_pretty(&chart)?
    } else {
        serde_json::to_string(&chart)?
    };
    println!("{json}");
    Ok(())
}
