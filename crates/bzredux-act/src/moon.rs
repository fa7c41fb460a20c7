//! The built-in "Moon" palette shipped with the game's toolkit.
//!
//! Used whenever no `.act` file has been loaded.

use bzredux_common::Rgb;

use crate::PALETTE_LEN;

pub(crate) const MOON: [Rgb; PALETTE_LEN] = [
    Rgb::new(0, 0, 0), Rgb::new(17, 16, 16), Rgb::new(26, 24, 24), Rgb::new(31, 26, 25),
    Rgb::new(36, 35, 31), Rgb::new(50, 42, 36), Rgb::new(52, 49, 48), Rgb::new(60, 56, 56),
    Rgb::new(68, 64, 64), Rgb::new(77, 72, 72), Rgb::new(85, 80, 80), Rgb::new(84, 79, 76),
    Rgb::new(112, 108, 104), Rgb::new(116, 129, 125), Rgb::new(133, 138, 133), Rgb::new(178, 174, 174),
    Rgb::new(191, 188, 188), Rgb::new(204, 201, 201), Rgb::new(217, 215, 215), Rgb::new(229, 228, 228),
    Rgb::new(255, 255, 255), Rgb::new(20, 3, 2), Rgb::new(40, 6, 3), Rgb::new(59, 10, 5),
    Rgb::new(79, 13, 6), Rgb::new(99, 16, 8), Rgb::new(107, 0, 8), Rgb::new(148, 8, 0),
    Rgb::new(140, 33, 8), Rgb::new(148, 16, 0), Rgb::new(156, 24, 0), Rgb::new(173, 57, 0),
    Rgb::new(189, 82, 8), Rgb::new(206, 99, 16), Rgb::new(200, 94, 11), Rgb::new(214, 101, 0),
    Rgb::new(214, 132, 33), Rgb::new(222, 123, 24), Rgb::new(231, 140, 33), Rgb::new(231, 156, 41),
    Rgb::new(239, 173, 57), Rgb::new(222, 156, 49), Rgb::new(222, 165, 57), Rgb::new(222, 165, 74),
    Rgb::new(231, 173, 99), Rgb::new(239, 189, 90), Rgb::new(247, 198, 82), Rgb::new(239, 206, 115),
    Rgb::new(249, 249, 149), Rgb::new(235, 230, 97), Rgb::new(183, 180, 81), Rgb::new(169, 133, 50),
    Rgb::new(131, 124, 45), Rgb::new(123, 99, 39), Rgb::new(149, 101, 17), Rgb::new(87, 59, 2),
    Rgb::new(80, 67, 28), Rgb::new(78, 48, 3), Rgb::new(53, 40, 12), Rgb::new(36, 24, 5),
    Rgb::new(171, 72, 69), Rgb::new(169, 168, 158), Rgb::new(153, 150, 139), Rgb::new(249, 249, 195),
    Rgb::new(223, 216, 188), Rgb::new(200, 189, 151), Rgb::new(194, 186, 139), Rgb::new(186, 172, 145),
    Rgb::new(167, 164, 145), Rgb::new(160, 151, 127), Rgb::new(175, 168, 134), Rgb::new(160, 145, 106),
    Rgb::new(157, 145, 109), Rgb::new(136, 130, 107), Rgb::new(132, 125, 80), Rgb::new(116, 104, 81),
    Rgb::new(96, 94, 83), Rgb::new(84, 73, 55), Rgb::new(115, 72, 1), Rgb::new(106, 81, 30),
    Rgb::new(109, 118, 109), Rgb::new(93, 106, 102), Rgb::new(79, 96, 90), Rgb::new(68, 91, 86),
    Rgb::new(63, 76, 73), Rgb::new(62, 63, 57), Rgb::new(48, 70, 67), Rgb::new(46, 61, 56),
    Rgb::new(37, 59, 54), Rgb::new(34, 50, 45), Rgb::new(31, 42, 41), Rgb::new(24, 36, 32),
    Rgb::new(19, 23, 21), Rgb::new(16, 14, 14), Rgb::new(15, 10, 6), Rgb::new(7, 11, 9),
    Rgb::new(181, 191, 204), Rgb::new(150, 156, 172), Rgb::new(139, 149, 164), Rgb::new(134, 143, 156),
    Rgb::new(125, 134, 150), Rgb::new(120, 130, 143), Rgb::new(115, 124, 139), Rgb::new(112, 129, 150),
    Rgb::new(111, 120, 135), Rgb::new(107, 116, 131), Rgb::new(106, 124, 145), Rgb::new(101, 117, 141),
    Rgb::new(100, 111, 128), Rgb::new(100, 108, 123), Rgb::new(96, 108, 123), Rgb::new(96, 104, 120),
    Rgb::new(95, 112, 135), Rgb::new(92, 104, 119), Rgb::new(92, 100, 116), Rgb::new(91, 108, 131),
    Rgb::new(88, 100, 115), Rgb::new(88, 96, 112), Rgb::new(85, 104, 127), Rgb::new(84, 96, 111),
    Rgb::new(84, 92, 108), Rgb::new(83, 100, 123), Rgb::new(80, 96, 119), Rgb::new(80, 92, 108),
    Rgb::new(80, 88, 104), Rgb::new(76, 96, 119), Rgb::new(76, 92, 116), Rgb::new(76, 92, 110),
    Rgb::new(76, 84, 100), Rgb::new(75, 88, 103), Rgb::new(74, 88, 108), Rgb::new(72, 92, 115),
    Rgb::new(72, 88, 112), Rgb::new(72, 84, 104), Rgb::new(72, 84, 99), Rgb::new(72, 80, 95),
    Rgb::new(68, 88, 112), Rgb::new(68, 84, 108), Rgb::new(68, 80, 100), Rgb::new(68, 76, 92),
    Rgb::new(67, 84, 102), Rgb::new(67, 80, 95), Rgb::new(64, 84, 108), Rgb::new(64, 80, 104),
    Rgb::new(64, 76, 96), Rgb::new(64, 72, 87), Rgb::new(63, 80, 100), Rgb::new(63, 76, 91),
    Rgb::new(60, 80, 104), Rgb::new(60, 76, 104), Rgb::new(60, 76, 100), Rgb::new(60, 72, 92),
    Rgb::new(60, 68, 83), Rgb::new(59, 76, 96), Rgb::new(59, 72, 87), Rgb::new(56, 76, 100),
    Rgb::new(56, 72, 100), Rgb::new(56, 72, 96), Rgb::new(56, 64, 79), Rgb::new(55, 72, 92),
    Rgb::new(55, 68, 83), Rgb::new(53, 68, 88), Rgb::new(52, 72, 96), Rgb::new(52, 68, 96),
    Rgb::new(52, 68, 92), Rgb::new(52, 64, 88), Rgb::new(52, 60, 75), Rgb::new(51, 64, 79),
    Rgb::new(49, 64, 84), Rgb::new(48, 68, 92), Rgb::new(48, 64, 92), Rgb::new(48, 60, 84),
    Rgb::new(47, 64, 88), Rgb::new(47, 60, 75), Rgb::new(47, 56, 72), Rgb::new(46, 56, 68),
    Rgb::new(45, 60, 88), Rgb::new(45, 60, 80), Rgb::new(44, 56, 79), Rgb::new(44, 52, 68),
    Rgb::new(44, 51, 64), Rgb::new(43, 60, 84), Rgb::new(40, 56, 80), Rgb::new(40, 56, 76),
    Rgb::new(40, 52, 76), Rgb::new(40, 48, 64), Rgb::new(40, 48, 60), Rgb::new(40, 44, 60),
    Rgb::new(36, 52, 72), Rgb::new(36, 51, 76), Rgb::new(36, 48, 72), Rgb::new(36, 40, 56),
    Rgb::new(35, 44, 60), Rgb::new(33, 41, 56), Rgb::new(31, 38, 53), Rgb::new(28, 36, 49),
    Rgb::new(26, 33, 45), Rgb::new(24, 30, 41), Rgb::new(22, 27, 38), Rgb::new(20, 24, 34),
    Rgb::new(17, 22, 30), Rgb::new(15, 19, 26), Rgb::new(13, 16, 23), Rgb::new(11, 13, 19),
    Rgb::new(9, 10, 15), Rgb::new(6, 8, 11), Rgb::new(4, 5, 8), Rgb::new(2, 2, 4),
    Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0), Rgb::new(0, 0, 0),
    Rgb::new(0, 255, 255), Rgb::new(0, 127, 127), Rgb::new(0, 63, 63), Rgb::new(78, 194, 242),
    Rgb::new(14, 153, 240), Rgb::new(7, 109, 222), Rgb::new(12, 149, 203), Rgb::new(6, 102, 171),
    Rgb::new(6, 93, 136), Rgb::new(3, 56, 124), Rgb::new(26, 35, 80), Rgb::new(0, 127, 255),
    Rgb::new(0, 99, 199), Rgb::new(0, 70, 141), Rgb::new(0, 34, 69), Rgb::new(0, 21, 42),
    Rgb::new(0, 255, 0), Rgb::new(0, 127, 0), Rgb::new(0, 63, 0), Rgb::new(0, 31, 0),
    Rgb::new(0, 15, 0), Rgb::new(255, 0, 0), Rgb::new(127, 0, 0), Rgb::new(63, 0, 0),
    Rgb::new(31, 0, 0), Rgb::new(15, 0, 0), Rgb::new(255, 255, 0), Rgb::new(164, 164, 0),
    Rgb::new(127, 127, 0), Rgb::new(80, 80, 0), Rgb::new(64, 64, 0), Rgb::new(255, 0, 255),
];
