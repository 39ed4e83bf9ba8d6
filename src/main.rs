fn main() -> anyhow::Result<()> {
    channel_picker::cli::run()
}
