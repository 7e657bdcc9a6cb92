//! Gradient direction tables for the 2D, 3D and 4D lattices.
//!
//! The base tables hold raw (unnormalized) direction vectors. The public tables cycle the
//! base rows up to a power-of-two row count and divide every component by the dimension's
//! normalizer, so a masked hash indexes them directly and the summed kernel output lands
//! in `[-1, 1]`.

use super::{N_GRADS_2D, N_GRADS_3D, N_GRADS_4D, NORMALIZER_2D, NORMALIZER_3D, NORMALIZER_4D};

/// 24 unit vectors spaced 15 degrees apart, offset 7.5 degrees from the axes. The eight
/// at odd multiples of 22.5 degrees come first.
const GRAD2_BASE: [[f64; 2]; 24] = [
    [0.38268343236509, 0.923879532511287],
    [0.923879532511287, 0.38268343236509],
    [0.923879532511287, -0.38268343236509],
    [0.38268343236509, -0.923879532511287],
    [-0.38268343236509, -0.923879532511287],
    [-0.923879532511287, -0.38268343236509],
    [-0.923879532511287, 0.38268343236509],
    [-0.38268343236509, 0.923879532511287],
    [0.130526192220052, 0.99144486137381],
    [0.608761429008721, 0.793353340291235],
    [0.793353340291235, 0.608761429008721],
    [0.99144486137381, 0.130526192220051],
    [0.99144486137381, -0.130526192220051],
    [0.793353340291235, -0.60876142900872],
    [0.608761429008721, -0.793353340291235],
    [0.130526192220052, -0.99144486137381],
    [-0.130526192220052, -0.99144486137381],
    [-0.608761429008721, -0.793353340291235],
    [-0.793353340291235, -0.608761429008721],
    [-0.99144486137381, -0.130526192220052],
    [-0.99144486137381, 0.130526192220051],
    [-0.793353340291235, 0.608761429008721],
    [-0.608761429008721, 0.793353340291235],
    [-0.130526192220052, 0.99144486137381],
];

/// 48 vectors of equal length (`sqrt(10.899...)`), arranged so the BCC lattice sees no
/// axis-aligned gradients.
const GRAD3_BASE: [[f64; 3]; 48] = [
    [2.22474487139, 2.22474487139, -1.0],
    [2.22474487139, 2.22474487139, 1.0],
    [3.0862664687972017, 1.1721513422464978, 0.0],
    [1.1721513422464978, 3.0862664687972017, 0.0],
    [-2.22474487139, 2.22474487139, -1.0],
    [-2.22474487139, 2.22474487139, 1.0],
    [-1.1721513422464978, 3.0862664687972017, 0.0],
    [-3.0862664687972017, 1.1721513422464978, 0.0],
    [-1.0, -2.22474487139, -2.22474487139],
    [1.0, -2.22474487139, -2.22474487139],
    [0.0, -3.0862664687972017, -1.1721513422464978],
    [0.0, -1.1721513422464978, -3.0862664687972017],
    [-1.0, -2.22474487139, 2.22474487139],
    [1.0, -2.22474487139, 2.22474487139],
    [0.0, -1.1721513422464978, 3.0862664687972017],
    [0.0, -3.0862664687972017, 1.1721513422464978],
    [-2.22474487139, -2.22474487139, -1.0],
    [-2.22474487139, -2.22474487139, 1.0],
    [-3.0862664687972017, -1.1721513422464978, 0.0],
    [-1.1721513422464978, -3.0862664687972017, 0.0],
    [-2.22474487139, -1.0, -2.22474487139],
    [-2.22474487139, 1.0, -2.22474487139],
    [-1.1721513422464978, 0.0, -3.0862664687972017],
    [-3.0862664687972017, 0.0, -1.1721513422464978],
    [-2.22474487139, -1.0, 2.22474487139],
    [-2.22474487139, 1.0, 2.22474487139],
    [-3.0862664687972017, 0.0, 1.1721513422464978],
    [-1.1721513422464978, 0.0, 3.0862664687972017],
    [-1.0, 2.22474487139, -2.22474487139],
    [1.0, 2.22474487139, -2.22474487139],
    [0.0, 1.1721513422464978, -3.0862664687972017],
    [0.0, 3.0862664687972017, -1.1721513422464978],
    [-1.0, 2.22474487139, 2.22474487139],
    [1.0, 2.22474487139, 2.22474487139],
    [0.0, 3.0862664687972017, 1.1721513422464978],
    [0.0, 1.1721513422464978, 3.0862664687972017],
    [2.22474487139, -2.22474487139, -1.0],
    [2.22474487139, -2.22474487139, 1.0],
    [1.1721513422464978, -3.0862664687972017, 0.0],
    [3.0862664687972017, -1.1721513422464978, 0.0],
    [2.22474487139, -1.0, -2.22474487139],
    [2.22474487139, 1.0, -2.22474487139],
    [3.0862664687972017, 0.0, -1.1721513422464978],
    [1.1721513422464978, 0.0, -3.0862664687972017],
    [2.22474487139, -1.0, 2.22474487139],
    [2.22474487139, 1.0, 2.22474487139],
    [1.1721513422464978, 0.0, 3.0862664687972017],
    [3.0862664687972017, 0.0, 1.1721513422464978],
];

/// 160 unit vectors in twenty families of eight.
///
/// Twelve families pair one strongly negative axis with one positive axis; the remaining
/// eight lean entirely negative or entirely positive around a dominant axis. The row order
/// is part of the output: a vertex hash picks its gradient by index.
const GRAD4_BASE: [[f64; 4]; 160] = [
    [-0.6740059517812944, -0.3239847771997537, -0.3239847771997537, 0.5794684678643381],
    [-0.7504883828755602, -0.4004672082940195, 0.15296486218853164, 0.5029860367700724],
    [-0.7504883828755602, 0.15296486218853164, -0.4004672082940195, 0.5029860367700724],
    [-0.8828161875373585, 0.08164729285680945, 0.08164729285680945, 0.4553054119602712],
    [-0.4553054119602712, -0.08164729285680945, -0.08164729285680945, 0.8828161875373585],
    [-0.5029860367700724, -0.15296486218853164, 0.4004672082940195, 0.7504883828755602],
    [-0.5029860367700724, 0.4004672082940195, -0.15296486218853164, 0.7504883828755602],
    [-0.5794684678643381, 0.3239847771997537, 0.3239847771997537, 0.6740059517812944],
    [-0.6740059517812944, -0.3239847771997537, 0.5794684678643381, -0.3239847771997537],
    [-0.7504883828755602, -0.4004672082940195, 0.5029860367700724, 0.15296486218853164],
    [-0.7504883828755602, 0.15296486218853164, 0.5029860367700724, -0.4004672082940195],
    [-0.8828161875373585, 0.08164729285680945, 0.4553054119602712, 0.08164729285680945],
    [-0.4553054119602712, -0.08164729285680945, 0.8828161875373585, -0.08164729285680945],
    [-0.5029860367700724, -0.15296486218853164, 0.7504883828755602, 0.4004672082940195],
    [-0.5029860367700724, 0.4004672082940195, 0.7504883828755602, -0.15296486218853164],
    [-0.5794684678643381, 0.3239847771997537, 0.6740059517812944, 0.3239847771997537],
    [-0.6740059517812944, 0.5794684678643381, -0.3239847771997537, -0.3239847771997537],
    [-0.7504883828755602, 0.5029860367700724, -0.4004672082940195, 0.15296486218853164],
    [-0.7504883828755602, 0.5029860367700724, 0.15296486218853164, -0.4004672082940195],
    [-0.8828161875373585, 0.4553054119602712, 0.08164729285680945, 0.08164729285680945],
    [-0.4553054119602712, 0.8828161875373585, -0.08164729285680945, -0.08164729285680945],
    [-0.5029860367700724, 0.7504883828755602, -0.15296486218853164, 0.4004672082940195],
    [-0.5029860367700724, 0.7504883828755602, 0.4004672082940195, -0.15296486218853164],
    [-0.5794684678643381, 0.6740059517812944, 0.3239847771997537, 0.3239847771997537],
    [0.5794684678643381, -0.6740059517812944, -0.3239847771997537, -0.3239847771997537],
    [0.5029860367700724, -0.7504883828755602, -0.4004672082940195, 0.15296486218853164],
    [0.5029860367700724, -0.7504883828755602, 0.15296486218853164, -0.4004672082940195],
    [0.4553054119602712, -0.8828161875373585, 0.08164729285680945, 0.08164729285680945],
    [0.8828161875373585, -0.4553054119602712, -0.08164729285680945, -0.08164729285680945],
    [0.7504883828755602, -0.5029860367700724, -0.15296486218853164, 0.4004672082940195],
    [0.7504883828755602, -0.5029860367700724, 0.4004672082940195, -0.15296486218853164],
    [0.6740059517812944, -0.5794684678643381, 0.3239847771997537, 0.3239847771997537],
    [-0.753341017856078, -0.37968289875261624, -0.37968289875261624, -0.37968289875261624],
    [-0.7821684431180708, -0.4321472685365301, -0.4321472685365301, 0.12128480194602098],
    [-0.7821684431180708, -0.4321472685365301, 0.12128480194602098, -0.4321472685365301],
    [-0.7821684431180708, 0.12128480194602098, -0.4321472685365301, -0.4321472685365301],
    [-0.8586508742123365, -0.508629699630796, 0.044802370851755174, 0.044802370851755174],
    [-0.8586508742123365, 0.044802370851755174, -0.508629699630796, 0.044802370851755174],
    [-0.8586508742123365, 0.044802370851755174, 0.044802370851755174, -0.508629699630796],
    [-0.9982828964265062, -0.03381941603233842, -0.03381941603233842, -0.03381941603233842],
    [-0.37968289875261624, -0.753341017856078, -0.37968289875261624, -0.37968289875261624],
    [-0.4321472685365301, -0.7821684431180708, -0.4321472685365301, 0.12128480194602098],
    [-0.4321472685365301, -0.7821684431180708, 0.12128480194602098, -0.4321472685365301],
    [0.12128480194602098, -0.7821684431180708, -0.4321472685365301, -0.4321472685365301],
    [-0.508629699630796, -0.8586508742123365, 0.044802370851755174, 0.044802370851755174],
    [0.044802370851755174, -0.8586508742123365, -0.508629699630796, 0.044802370851755174],
    [0.044802370851755174, -0.8586508742123365, 0.044802370851755174, -0.508629699630796],
    [-0.03381941603233842, -0.9982828964265062, -0.03381941603233842, -0.03381941603233842],
    [-0.37968289875261624, -0.37968289875261624, -0.753341017856078, -0.37968289875261624],
    [-0.4321472685365301, -0.4321472685365301, -0.7821684431180708, 0.12128480194602098],
    [-0.4321472685365301, 0.12128480194602098, -0.7821684431180708, -0.4321472685365301],
    [0.12128480194602098, -0.4321472685365301, -0.7821684431180708, -0.4321472685365301],
    [-0.508629699630796, 0.044802370851755174, -0.8586508742123365, 0.044802370851755174],
    [0.044802370851755174, -0.508629699630796, -0.8586508742123365, 0.044802370851755174],
    [0.044802370851755174, 0.044802370851755174, -0.8586508742123365, -0.508629699630796],
    [-0.03381941603233842, -0.03381941603233842, -0.9982828964265062, -0.03381941603233842],
    [-0.37968289875261624, -0.37968289875261624, -0.37968289875261624, -0.753341017856078],
    [-0.4321472685365301, -0.4321472685365301, 0.12128480194602098, -0.7821684431180708],
    [-0.4321472685365301, 0.12128480194602098, -0.4321472685365301, -0.7821684431180708],
    [0.12128480194602098, -0.4321472685365301, -0.4321472685365301, -0.7821684431180708],
    [-0.508629699630796, 0.044802370851755174, 0.044802370851755174, -0.8586508742123365],
    [0.044802370851755174, -0.508629699630796, 0.044802370851755174, -0.8586508742123365],
    [0.044802370851755174, 0.044802370851755174, -0.508629699630796, -0.8586508742123365],
    [-0.03381941603233842, -0.03381941603233842, -0.03381941603233842, -0.9982828964265062],
    [-0.3239847771997537, -0.6740059517812944, -0.3239847771997537, 0.5794684678643381],
    [-0.4004672082940195, -0.7504883828755602, 0.15296486218853164, 0.5029860367700724],
    [0.15296486218853164, -0.7504883828755602, -0.4004672082940195, 0.5029860367700724],
    [0.08164729285680945, -0.8828161875373585, 0.08164729285680945, 0.4553054119602712],
    [-0.08164729285680945, -0.4553054119602712, -0.08164729285680945, 0.8828161875373585],
    [-0.15296486218853164, -0.5029860367700724, 0.4004672082940195, 0.7504883828755602],
    [0.4004672082940195, -0.5029860367700724, -0.15296486218853164, 0.7504883828755602],
    [0.3239847771997537, -0.5794684678643381, 0.3239847771997537, 0.6740059517812944],
    [-0.3239847771997537, -0.3239847771997537, -0.6740059517812944, 0.5794684678643381],
    [-0.4004672082940195, 0.15296486218853164, -0.7504883828755602, 0.5029860367700724],
    [0.15296486218853164, -0.4004672082940195, -0.7504883828755602, 0.5029860367700724],
    [0.08164729285680945, 0.08164729285680945, -0.8828161875373585, 0.4553054119602712],
    [-0.08164729285680945, -0.08164729285680945, -0.4553054119602712, 0.8828161875373585],
    [-0.15296486218853164, 0.4004672082940195, -0.5029860367700724, 0.7504883828755602],
    [0.4004672082940195, -0.15296486218853164, -0.5029860367700724, 0.7504883828755602],
    [0.3239847771997537, 0.3239847771997537, -0.5794684678643381, 0.6740059517812944],
    [-0.3239847771997537, -0.6740059517812944, 0.5794684678643381, -0.3239847771997537],
    [-0.4004672082940195, -0.7504883828755602, 0.5029860367700724, 0.15296486218853164],
    [0.15296486218853164, -0.7504883828755602, 0.5029860367700724, -0.4004672082940195],
    [0.08164729285680945, -0.8828161875373585, 0.4553054119602712, 0.08164729285680945],
    [-0.08164729285680945, -0.4553054119602712, 0.8828161875373585, -0.08164729285680945],
    [-0.15296486218853164, -0.5029860367700724, 0.7504883828755602, 0.4004672082940195],
    [0.4004672082940195, -0.5029860367700724, 0.7504883828755602, -0.15296486218853164],
    [0.3239847771997537, -0.5794684678643381, 0.6740059517812944, 0.3239847771997537],
    [-0.3239847771997537, -0.3239847771997537, 0.5794684678643381, -0.6740059517812944],
    [-0.4004672082940195, 0.15296486218853164, 0.5029860367700724, -0.7504883828755602],
    [0.15296486218853164, -0.4004672082940195, 0.5029860367700724, -0.7504883828755602],
    [0.08164729285680945, 0.08164729285680945, 0.4553054119602712, -0.8828161875373585],
    [-0.08164729285680945, -0.08164729285680945, 0.8828161875373585, -0.4553054119602712],
    [-0.15296486218853164, 0.4004672082940195, 0.7504883828755602, -0.5029860367700724],
    [0.4004672082940195, -0.15296486218853164, 0.7504883828755602, -0.5029860367700724],
    [0.3239847771997537, 0.3239847771997537, 0.6740059517812944, -0.5794684678643381],
    [-0.3239847771997537, 0.5794684678643381, -0.6740059517812944, -0.3239847771997537],
    [-0.4004672082940195, 0.5029860367700724, -0.7504883828755602, 0.15296486218853164],
    [0.15296486218853164, 0.5029860367700724, -0.7504883828755602, -0.4004672082940195],
    [0.08164729285680945, 0.4553054119602712, -0.8828161875373585, 0.08164729285680945],
    [-0.08164729285680945, 0.8828161875373585, -0.4553054119602712, -0.08164729285680945],
    [-0.15296486218853164, 0.7504883828755602, -0.5029860367700724, 0.4004672082940195],
    [0.4004672082940195, 0.7504883828755602, -0.5029860367700724, -0.15296486218853164],
    [0.3239847771997537, 0.6740059517812944, -0.5794684678643381, 0.3239847771997537],
    [-0.3239847771997537, 0.5794684678643381, -0.3239847771997537, -0.6740059517812944],
    [-0.4004672082940195, 0.5029860367700724, 0.15296486218853164, -0.7504883828755602],
    [0.15296486218853164, 0.5029860367700724, -0.4004672082940195, -0.7504883828755602],
    [0.08164729285680945, 0.4553054119602712, 0.08164729285680945, -0.8828161875373585],
    [-0.08164729285680945, 0.8828161875373585, -0.08164729285680945, -0.4553054119602712],
    [-0.15296486218853164, 0.7504883828755602, 0.4004672082940195, -0.5029860367700724],
    [0.4004672082940195, 0.7504883828755602, -0.15296486218853164, -0.5029860367700724],
    [0.3239847771997537, 0.6740059517812944, 0.3239847771997537, -0.5794684678643381],
    [0.5794684678643381, -0.3239847771997537, -0.6740059517812944, -0.3239847771997537],
    [0.5029860367700724, -0.4004672082940195, -0.7504883828755602, 0.15296486218853164],
    [0.5029860367700724, 0.15296486218853164, -0.7504883828755602, -0.4004672082940195],
    [0.4553054119602712, 0.08164729285680945, -0.8828161875373585, 0.08164729285680945],
    [0.8828161875373585, -0.08164729285680945, -0.4553054119602712, -0.08164729285680945],
    [0.7504883828755602, -0.15296486218853164, -0.5029860367700724, 0.4004672082940195],
    [0.7504883828755602, 0.4004672082940195, -0.5029860367700724, -0.15296486218853164],
    [0.6740059517812944, 0.3239847771997537, -0.5794684678643381, 0.3239847771997537],
    [0.5794684678643381, -0.3239847771997537, -0.3239847771997537, -0.6740059517812944],
    [0.5029860367700724, -0.4004672082940195, 0.15296486218853164, -0.7504883828755602],
    [0.5029860367700724, 0.15296486218853164, -0.4004672082940195, -0.7504883828755602],
    [0.4553054119602712, 0.08164729285680945, 0.08164729285680945, -0.8828161875373585],
    [0.8828161875373585, -0.08164729285680945, -0.08164729285680945, -0.4553054119602712],
    [0.7504883828755602, -0.15296486218853164, 0.4004672082940195, -0.5029860367700724],
    [0.7504883828755602, 0.4004672082940195, -0.15296486218853164, -0.5029860367700724],
    [0.6740059517812944, 0.3239847771997537, 0.3239847771997537, -0.5794684678643381],
    [0.03381941603233842, 0.03381941603233842, 0.03381941603233842, 0.9982828964265062],
    [-0.044802370851755174, -0.044802370851755174, 0.508629699630796, 0.8586508742123365],
    [-0.044802370851755174, 0.508629699630796, -0.044802370851755174, 0.8586508742123365],
    [-0.12128480194602098, 0.4321472685365301, 0.4321472685365301, 0.7821684431180708],
    [0.508629699630796, -0.044802370851755174, -0.044802370851755174, 0.8586508742123365],
    [0.4321472685365301, -0.12128480194602098, 0.4321472685365301, 0.7821684431180708],
    [0.4321472685365301, 0.4321472685365301, -0.12128480194602098, 0.7821684431180708],
    [0.37968289875261624, 0.37968289875261624, 0.37968289875261624, 0.753341017856078],
    [0.03381941603233842, 0.03381941603233842, 0.9982828964265062, 0.03381941603233842],
    [-0.044802370851755174, 0.044802370851755174, 0.8586508742123365, 0.508629699630796],
    [-0.044802370851755174, 0.508629699630796, 0.8586508742123365, -0.044802370851755174],
    [-0.12128480194602098, 0.4321472685365301, 0.7821684431180708, 0.4321472685365301],
    [0.508629699630796, -0.044802370851755174, 0.8586508742123365, -0.044802370851755174],
    [0.4321472685365301, -0.12128480194602098, 0.7821684431180708, 0.4321472685365301],
    [0.4321472685365301, 0.4321472685365301, 0.7821684431180708, -0.12128480194602098],
    [0.37968289875261624, 0.37968289875261624, 0.753341017856078, 0.37968289875261624],
    [0.03381941603233842, 0.9982828964265062, 0.03381941603233842, 0.03381941603233842],
    [-0.044802370851755174, 0.8586508742123365, -0.044802370851755174, 0.508629699630796],
    [-0.044802370851755174, 0.8586508742123365, 0.508629699630796, -0.044802370851755174],
    [-0.12128480194602098, 0.7821684431180708, 0.4321472685365301, 0.4321472685365301],
    [0.508629699630796, 0.8586508742123365, -0.044802370851755174, -0.044802370851755174],
    [0.4321472685365301, 0.7821684431180708, -0.12128480194602098, 0.4321472685365301],
    [0.4321472685365301, 0.7821684431180708, 0.4321472685365301, -0.12128480194602098],
    [0.37968289875261624, 0.753341017856078, 0.37968289875261624, 0.37968289875261624],
    [0.9982828964265062, 0.03381941603233842, 0.03381941603233842, 0.03381941603233842],
    [0.8586508742123365, -0.044802370851755174, -0.044802370851755174, 0.508629699630796],
    [0.8586508742123365, -0.044802370851755174, 0.508629699630796, -0.044802370851755174],
    [0.7821684431180708, -0.12128480194602098, 0.4321472685365301, 0.4321472685365301],
    [0.8586508742123365, 0.508629699630796, -0.044802370851755174, -0.044802370851755174],
    [0.7821684431180708, 0.4321472685365301, -0.12128480194602098, 0.4321472685365301],
    [0.7821684431180708, 0.4321472685365301, 0.4321472685365301, -0.12128480194602098],
    [0.753341017856078, 0.37968289875261624, 0.37968289875261624, 0.37968289875261624],
];

/// Normalized 2D gradients, indexed by [`grad2`](super::hash::grad2).
pub static GRADIENTS_2D: [[f64; 2]; N_GRADS_2D] = expand(&GRAD2_BASE, NORMALIZER_2D);
/// Normalized 3D gradients, indexed by [`grad3`](super::hash::grad3).
pub static GRADIENTS_3D: [[f64; 3]; N_GRADS_3D] = expand(&GRAD3_BASE, NORMALIZER_3D);
/// Normalized 4D gradients, indexed by [`grad4`](super::hash::grad4).
pub static GRADIENTS_4D: [[f64; 4]; N_GRADS_4D] = expand(&GRAD4_BASE, NORMALIZER_4D);

/// Repeat `base` until `N` rows are filled, dividing each component by `normalizer`.
const fn expand<const D: usize, const M: usize, const N: usize>(
    base: &[[f64; D]; M],
    normalizer: f64,
) -> [[f64; D]; N] {
    let mut out = [[0.0; D]; N];
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < D {
            out[i][j] = base[i % M][j] / normalizer;
            j += 1;
        }
        i += 1;
    }
    out
}
