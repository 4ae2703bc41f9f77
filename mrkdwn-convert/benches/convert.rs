use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mrkdwn_convert::{Converter, ConverterOptions};

// Self-contained sample documents, so the bench needs no fixture files.
const MARKDOWN_SMALL: &str = "# Release notes\n\nThis is **bold**, *italic* \
                              and `code`.\n";

const MARKDOWN_LARGE: &str = r#"# Weekly update

The deploy pipeline is **green** again after the ~~flaky~~ fixed cache step.
See [the runbook](https://example.com/runbook) for details.

## Done

- [x] Rotate credentials
- [x] Migrate the `jobs` table
- [ ] Remove the old queue

1. Build
2. Test
   - unit
   - integration
3. Ship

> Reminder: the freeze starts on Friday.
>
> Ping the channel before merging.

| Service | Owner | Status |
|---------|-------|--------|
| api     | alice | ok     |
| web     | bob   | degraded |

```rust
fn main() {
    println!("hello");
}
```

---

![dashboard](https://example.com/dash.png)
"#;

const MRKDWN_SMALL: &str = "*Deploy* finished :rocket: <@U123|alice>";

const MRKDWN_LARGE: &str = "*Weekly update* :tada:
The deploy pipeline is *green* again after the ~flaky~ fixed cache step.
See <https://example.com/runbook|the runbook> for details, cc <!here>.
> Reminder: the freeze starts on Friday.
> Ping <#C42|deploys> before merging.
• Rotate credentials :white_check_mark:
• Migrate the `jobs` table
• Remove the old queue
1. Build
2. Test
3. Ship :ship:
```
fn main() {
    println!(\"*not bold*\");
}
```
Thanks _everyone_! :+1::skin-tone-3:";

fn bench_markdown_to_mrkdwn(c: &mut Criterion) {
  let mut group = c.benchmark_group("markdown_to_mrkdwn");
  let converter = Converter::new(ConverterOptions::default());

  for (name, input) in [("small", MARKDOWN_SMALL), ("large", MARKDOWN_LARGE)] {
    group.bench_with_input(BenchmarkId::new("gfm", name), &input, |b, md| {
      b.iter(|| converter.markdown_to_mrkdwn(black_box(md)));
    });
  }

  group.finish();
}

fn bench_mrkdwn_to_html(c: &mut Criterion) {
  let mut group = c.benchmark_group("mrkdwn_to_html");
  let converter = Converter::new(ConverterOptions::default());

  for (name, input) in [("small", MRKDWN_SMALL), ("large", MRKDWN_LARGE)] {
    group.bench_with_input(BenchmarkId::new("default", name), &input, |b, text| {
      b.iter(|| converter.mrkdwn_to_html(black_box(text)));
    });
  }

  group.finish();
}

// Delimiter-heavy inputs that would blow up a backtracking matcher. These
// should scale linearly with length.
fn bench_adversarial(c: &mut Criterion) {
  let mut group = c.benchmark_group("adversarial");
  let converter = Converter::default();

  for size in [1_000, 10_000] {
    let stars = "*a ".repeat(size);
    group.bench_with_input(BenchmarkId::new("open_stars", size), &stars, |b, text| {
      b.iter(|| converter.mrkdwn_to_html(black_box(text)));
    });

    let colons = ":a".repeat(size);
    group.bench_with_input(BenchmarkId::new("colons", size), &colons, |b, text| {
      b.iter(|| converter.mrkdwn_to_html(black_box(text)));
    });

    let brackets = "<@".repeat(size);
    group.bench_with_input(BenchmarkId::new("brackets", size), &brackets, |b, text| {
      b.iter(|| converter.mrkdwn_to_html(black_box(text)));
    });

    let backticks = "`a".repeat(size);
    group.bench_with_input(BenchmarkId::new("backticks", size), &backticks, |b, text| {
      b.iter(|| converter.mrkdwn_to_html(black_box(text)));
    });
  }

  group.finish();
}

criterion_group!(
  benches,
  bench_markdown_to_mrkdwn,
  bench_mrkdwn_to_html,
  bench_adversarial
);
criterion_main!(benches);
