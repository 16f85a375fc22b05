#[pantry_derive::main(turbo)]
async fn serve() -> Result<(), String> {
    Ok(())
}

fn main() {}
