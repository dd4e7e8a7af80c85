fn main() -> anyhow::Result<()> {
    mtx_proj::main()
}
