use ark_ff::{fields::*, MontFp};

use crate::*;

pub type Fq6 = Fp6<Fq6Config>;

#[derive(Clone, Copy)]
pub struct Fq6Config;

impl Fp6Config for Fq6Config {
    type Fp2Config = Fq2Config;

    /// NONRESIDUE = U+2
    const NONRESIDUE: Fq2 = Fq2::new(MontFp!("2"), Fq::ONE);

    const FROBENIUS_COEFF_FP6_C1: &'static [Fq2] = &[
        // Fp2::NONRESIDUE^(((q^0) - 1) / 3)
        Fq2::new(Fq::ONE, Fq::ZERO),
        // Fp2::NONRESIDUE^(((q^1) - 1) / 3)
        Fq2::new(
            MontFp!("54951812740761921621508550042997553760355686598369706824444409084285027546547"),
            MontFp!("56304928782522767986428411651368473382827307979349835406281275567315241576447"),
        ),
        // Fp2::NONRESIDUE^(((q^2) - 1) / 3)
        Fq2::new(MontFp!("7687848157618018096874460774185039390143432256831478675463"), Fq::ZERO),
        // Fp2::NONRESIDUE^(((q^3) - 1) / 3)
        Fq2::new(
            MontFp!("83910363814819089033915615734887115727861253706633033847546304045127125135359"),
            MontFp!("66838151050122441408649058780937908715349651770758698166510175709660696439255"),
        ),
        // Fp2::NONRESIDUE^(((q^4) - 1) / 3)
        Fq2::new(
            MontFp!("115792089237314936865000713086853723961501417581576165808556977265798185842699"),
            Fq::ZERO,
        ),
        // Fp2::NONRESIDUE^(((q^5) - 1) / 3)
        Fq2::new(
            MontFp!("92722001919048863089952956711058814628534816406519669725410105915847176354420"),
            MontFp!("108441098641984664350299652056637102018574796961413876824609367768283391020624"),
        ),
    ];

    const FROBENIUS_COEFF_FP6_C2: &'static [Fq2] = &[
        // Fp2::NONRESIDUE^((2*(q^0) - 2) / 3)
        Fq2::new(Fq::ONE, Fq::ZERO),
        // Fp2::NONRESIDUE^((2*(q^1) - 2) / 3)
        Fq2::new(
            MontFp!("15197157932767561122807476879114303985611403617085182455038733143933458803418"),
            MontFp!("69183499906736997288697253637219822791103849738306107482567031747085620436783"),
        ),
        // Fp2::NONRESIDUE^((2*(q^2) - 2) / 3)
        Fq2::new(
            MontFp!("115792089237314936865000713086853723961501417581576165808556977265798185842699"),
            Fq::ZERO,
        ),
        // Fp2::NONRESIDUE^((2*(q^3) - 2) / 3)
        Fq2::new(
            MontFp!("20034115296256487667967834665076290876112206478525102815059723763873650833444"),
            MontFp!("54877743250312175549442057885788001070227435670304041300237424669783412353588"),
        ),
        // Fp2::NONRESIDUE^((2*(q^4) - 2) / 3)
        Fq2::new(MontFp!("7687848157618018096874460774185039390143432256831478675463"), Fq::ZERO),
        // Fp2::NONRESIDUE^((2*(q^5) - 2) / 3)
        Fq2::new(
            MontFp!("80560816008290888081913249700281147196652268260150919928601952614822554881301"),
            MontFp!("107522935317580700907237810965935660255420471302912261614596362628390296245955"),
        ),
    ];

    #[inline(always)]
    fn mul_fp2_by_nonresidue_in_place(fe: &mut Fq2) -> &mut Fq2 {
        // (c0+u*c1)*(2+u) = (2*c0-c1)+u*(2*c1+c0)
        let c0 = fe.c0.double() - &fe.c1;
        let c1 = fe.c1.double() + &fe.c0;
        *fe = Fq2::new(c0, c1);
        fe
    }
}
