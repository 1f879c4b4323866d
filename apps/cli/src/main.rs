fn main() -> anyhow::Result<()> {
    yamp::run()
}
