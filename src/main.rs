use library_circulation::{
    application::{Library, LoanService},
    config::LibraryConfig,
    domain::{Inventory, Item, ItemId, MemberId},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_circulation=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LibraryConfig::from_env()?;
    tracing::info!(
        notifier = config.notifier.as_str(),
        event_log = config.event_log.as_str(),
        log_path = %config.log_path.display(),
        "Configuration loaded"
    );

    // Wire components
    let loans = LoanService::new(config.build_notifier(), config.build_event_logger());
    let mut library = Library::new(Inventory::new(), loans);

    library.add_item(Item::book("L001", "1984", "George Orwell"));
    library.add_item(Item::magazine("R001", "Muy Interesante", 203));
    print!("{}", library.render_inventory());

    let book = ItemId::new("L001");
    let juan = MemberId::new("juan@example.com");
    let ana = MemberId::new("ana@example.com");

    library.loan_item(&book, &juan)?;
    // Second loan of the same item must be rejected
    library.loan_item(&book, &ana)?;
    print!("{}", library.render_inventory());

    library.return_item(&book, &juan)?;
    print!("{}", library.render_inventory());

    Ok(())
}
