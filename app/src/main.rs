fn main() -> anyhow::Result<()> {
  songrate_lib::run()
}
