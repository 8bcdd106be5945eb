use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use xmpsift::XmpDocument;

fn thumbnail_item(i: usize) -> String {
    format!(
        r#"<rdf:li xmpGImg:width="256" xmpGImg:height="{}" xmpGImg:format="JPEG" xmpGImg:image="/9j/4AAQSkZJRgABAgEASABIAAD"/>"#,
        100 + i
    )
}

fn host_text(thumbnails: usize, padding: usize) -> String {
    let items: String = (0..thumbnails).map(thumbnail_item).collect();
    format!(
        r#"{pad}<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
      xmlns:dc="http://purl.org/dc/elements/1.1/"
      xmlns:xmp="http://ns.adobe.com/xap/1.0/"
      xmlns:xmpGImg="http://ns.adobe.com/xap/1.0/g/img/"
      xmp:CreatorTool="Bench" xmp:CreateDate="2020-01-01T00:00:00Z">
   <dc:title><rdf:Alt><rdf:li xml:lang="x-default">Bench</rdf:li></rdf:Alt></dc:title>
   <xmp:Thumbnails><rdf:Alt>{items}</rdf:Alt></xmp:Thumbnails>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>{pad}"#,
        pad = "\u{fffd}".repeat(padding),
        items = items
    )
}

fn bench_locate_and_parse(c: &mut Criterion) {
    let small = host_text(1, 16);
    let padded = host_text(1, 1 << 18);

    c.bench_function("from_text_small", |b| {
        b.iter(|| XmpDocument::from_text(black_box(&small)))
    });

    c.bench_function("from_text_padded", |b| {
        b.iter(|| XmpDocument::from_text(black_box(&padded)))
    });
}

fn bench_extract(c: &mut Criterion) {
    let doc = XmpDocument::from_text(&host_text(64, 0));

    c.bench_function("thumbnails_64", |b| b.iter(|| black_box(&doc).thumbnails()));

    c.bench_function("properties", |b| b.iter(|| black_box(&doc).properties()));
}

criterion_group!(benches, bench_locate_and_parse, bench_extract);
criterion_main!(benches);
