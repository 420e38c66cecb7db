use clap::{Parser, ValueEnum};
use coursecart::application::checkout::CheckoutManager;
use coursecart::application::engine::DiscountEngine;
use coursecart::domain::discount::ItemCountDiscount;
use coursecart::domain::ports::NotificationSenderBox;
use coursecart::infrastructure::in_memory::InMemoryCourseApi;
use coursecart::infrastructure::senders::{EmailSender, Outbox, SmsSender};
use coursecart::interfaces::csv::event_reader::EventReader;
use coursecart::interfaces::csv::receipt_writer::ReceiptWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal_macros::dec;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NotifyChannel {
    Email,
    Sms,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input checkout events CSV file
    input: PathBuf,

    /// Notification channel for purchase confirmations
    #[arg(long, value_enum, default_value = "email")]
    notify: NotifyChannel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Discount tiers; earliest registration wins ties.
    let mut engine = DiscountEngine::new();
    engine.register(Box::new(ItemCountDiscount::new("bronze", 10, 20, dec!(10))));
    engine.register(Box::new(ItemCountDiscount::new("silver", 20, 30, dec!(30))));
    engine.register(Box::new(ItemCountDiscount::new("gold", 30, 50, dec!(50))));

    let outbox = Outbox::new();

    // The only place that branches on the channel selector.
    let sender: NotificationSenderBox = match cli.notify {
        NotifyChannel::Email => Box::new(EmailSender::new(outbox.clone())),
        NotifyChannel::Sms => Box::new(SmsSender::new(outbox.clone())),
    };

    let api = InMemoryCourseApi::new();
    let mut manager = CheckoutManager::new(engine, Box::new(api), sender);

    // Process checkout events
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    let mut receipts = Vec::new();
    for event_result in reader.events() {
        match event_result {
            Ok(event) => match manager.handle_event(event).await {
                Ok(Some(receipt)) => receipts.push(receipt),
                Ok(None) => {}
                Err(e) => {
                    eprintln!("Error processing event: {}", e);
                }
            },
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    // Output receipts
    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());
    writer.write_receipts(receipts).into_diagnostic()?;

    // Report what the notification channel would have delivered
    for message in outbox.drain().await {
        eprintln!("{}", message);
    }

    Ok(())
}
