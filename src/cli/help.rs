pub fn print_help() {
    println!(
        "\
genpass {version}
Random passwords from the OS CSPRNG, with unbiased character selection.

USAGE:
  genpass [OPTIONS]

PASSWORD:
  -l, --length <N>        Characters per password (default: 10)
  -n, --number <N>        How many passwords to generate (default: 1)
      --no-lower          Leave out lowercase letters
      --no-upper          Leave out uppercase letters
  -N, --numbers           Include digits
  -S, --symbols           Include symbols
      --special <CHARS>   Custom symbol set (implies --symbols)
  -x, --exclude <CHARS>   Never use these characters
      --similar           Exclude look-alikes: i l L I | ` o O 0
      --strict            At least one character from every enabled class
      --max-retries <N>   Give up on --strict after N regenerations

OUTPUT:
  -b, --board             Copy to clipboard
  -o, --output [PATH]     Append to file (default: ./genpass.txt)
  -q, --quiet             Suppress warnings and prompts

DEFAULTS:
  -s, --saved             Start from saved defaults
      --save              Save the resolved options as defaults

  -h, --help              Show this help
  -v, --version           Show version

Set GENPASS_LOG=debug for diagnostics on stderr.",
        version = env!("CARGO_PKG_VERSION")
    );
}
