use atlas_showcase::address::Address;
use clap::Args;

use crate::{config::CliShowcase, render};

#[derive(Args)]
pub struct GeocodeArgs {
    /// Google API key for this run only, the remembered key is used when
    /// omitted and is never replaced
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    #[arg(long)]
    street: Option<String>,

    #[arg(long)]
    postalcode: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    #[arg(long)]
    country: Option<String>,
}

impl GeocodeArgs {
    /// The example address when no part is given.
    fn address(&self) -> Address {
        let parts = [
            &self.street,
            &self.postalcode,
            &self.city,
            &self.state,
            &self.country,
        ];

        if parts.iter().all(|part| part.is_none()) {
            return Address::example();
        }

        Address {
            street: self.street.clone().unwrap_or_default(),
            postalcode: self.postalcode.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
        }
    }
}

pub async fn run(showcase: &mut CliShowcase, args: GeocodeArgs) -> anyhow::Result<()> {
    showcase.set_address(args.address());
    if let Some(api_key) = args.api_key {
        showcase.use_api_key(api_key);
    }

    match showcase.submit_geocode().await {
        Some(_) => {
            println!("{}", render::locations_table(showcase.locations()));
            Ok(())
        }
        None => Err(anyhow::anyhow!("Address could not be geocoded")),
    }
}
