use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formbind_codec::{bind, BindTarget, Field, FieldSlot, FilePart, MultipartForm};

#[derive(Debug, Default)]
struct Attachment {
    doc: Option<FilePart>,
    extras: Vec<Option<FilePart>>,
}

impl BindTarget for Attachment {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("doc", FieldSlot::File(&mut self.doc)),
            Field::new("extras", FieldSlot::FileSeq(&mut self.extras)),
        ]
    }
}

#[derive(Debug, Default)]
struct Ticket {
    attachments: Vec<Attachment>,
    cover: Option<FilePart>,
}

impl BindTarget for Ticket {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("attachments", FieldSlot::GroupSeq(&mut self.attachments)),
            Field::new("cover", FieldSlot::File(&mut self.cover)),
        ]
    }
}

fn build_form(attachment_count: usize, extras_per_attachment: usize) -> MultipartForm {
    let mut form = MultipartForm::new().with_file("cover", FilePart::from_bytes("cover.png", "x"));
    for i in 0..attachment_count {
        form = form.with_file(
            format!("attachments[{i}].doc"),
            FilePart::from_bytes(format!("doc{i}.pdf"), "x"),
        );
        for j in 0..extras_per_attachment {
            form = form.with_file(
                format!("attachments[{i}].extras[{j}]"),
                FilePart::from_bytes(format!("extra{i}_{j}.png"), "x"),
            );
        }
    }
    form
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    for attachment_count in [4, 32, 128] {
        let form = build_form(attachment_count, 4);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{attachment_count}att_4extras")),
            &form,
            |b, form| {
                b.iter(|| {
                    let mut ticket = Ticket::default();
                    bind(&mut ticket, black_box(form)).unwrap();
                    black_box(ticket);
                });
            },
        );
    }

    group.finish();
}

fn bench_flat_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_sequences");

    for count in [16, 256] {
        let mut form = MultipartForm::new();
        for i in 0..count {
            form = form.with_file(
                format!("extras[{i}]"),
                FilePart::from_bytes(format!("f{i}"), "x"),
            );
        }

        #[derive(Debug, Default)]
        struct Flat {
            extras: Vec<Option<FilePart>>,
        }

        impl BindTarget for Flat {
            fn fields(&mut self) -> Vec<Field<'_>> {
                vec![Field::new("extras", FieldSlot::FileSeq(&mut self.extras))]
            }
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}files")),
            &form,
            |b, form| {
                b.iter(|| {
                    let mut flat = Flat::default();
                    bind(&mut flat, black_box(form)).unwrap();
                    black_box(flat);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_placement, bench_flat_sequences);
criterion_main!(benches);
