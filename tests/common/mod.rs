use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes an event CSV where each customer creates a session, adds
/// `items_per_customer` courses at the given price, and completes.
pub fn generate_events_csv(
    path: &Path,
    customers: u32,
    items_per_customer: usize,
    price: &str,
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "customer", "course", "price"])?;

    for customer in 1..=customers {
        let customer = customer.to_string();
        wtr.write_record(["create", &customer, "", ""])?;
        for i in 0..items_per_customer {
            wtr.write_record(["add", &customer, &format!("course-{i}"), price])?;
        }
        wtr.write_record(["complete", &customer, "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
