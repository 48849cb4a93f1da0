//! Performance benchmarks for site2doc.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use site2doc::detect::detect_main_content;
use site2doc::navigation::detect_navigation;
use site2doc::{dom, DetectorOptions};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Page</title>
</head>
<body>
    <nav class="navigation">
        <a href="index.html">Home</a>
        <a href="guide.html">Guide</a>
        <a href="reference.html">Reference</a>
    </nav>
    <main>
        <h1>Sample Page Title</h1>
        <p>This is the first paragraph of the page. It contains meaningful
        content that the detection heuristics should score highly.</p>
        <p>Here is a second paragraph with more content. Detection should
        pick the main region while filtering navigation and boilerplate.</p>
        <p>A third paragraph ensures there is enough content for the
        density and paragraph-count bonuses to apply.</p>
    </main>
    <aside class="sidebar">
        <h3>Related</h3>
        <ul>
            <li><a href="one.html">Related page 1</a></li>
            <li><a href="two.html">Related page 2</a></li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2026</p>
    </footer>
</body>
</html>
"#;

fn build_large_html() -> String {
    let mut sections = String::new();
    for i in 0..100 {
        sections.push_str(&format!(
            "<div class=\"block-{i}\"><h2>Section {i}</h2>\
             <p>Paragraph one of section {i} with a reasonable amount of text.</p>\
             <p>Paragraph two of section {i} continues with more prose.</p>\
             <p>Paragraph three of section {i} wraps the section up.</p></div>"
        ));
    }
    format!(
        "<html><head><title>Large</title></head><body>\
         <nav><a href=\"a.html\">A</a><a href=\"b.html\">B</a></nav>\
         <div id=\"content\">{sections}</div></body></html>"
    )
}

fn bench_detection(c: &mut Criterion) {
    let options = DetectorOptions::default();
    let large = build_large_html();

    let mut group = c.benchmark_group("detect_main_content");

    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("small_page", |b| {
        b.iter(|| {
            let doc = dom::parse(black_box(SAMPLE_HTML));
            detect_main_content(&doc, &options)
        });
    });

    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large_page", |b| {
        b.iter(|| {
            let doc = dom::parse(black_box(&large));
            detect_main_content(&doc, &options)
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    c.bench_function("detect_navigation", |b| {
        b.iter(|| {
            let doc = dom::parse(black_box(SAMPLE_HTML));
            detect_navigation(&doc)
        });
    });
}

criterion_group!(benches, bench_detection, bench_navigation);
criterion_main!(benches);
